use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{FeaturedProject, CV_PATH, FEATURED_PROJECTS, OWNER};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <main id="main-content">
            <Hero />
            <FeaturedProjects />
        </main>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-2xl font-bold text-primary">{value}</div>
            <div class="text-sm text-muted-foreground">{label}</div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-24 pb-16 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <div class="space-y-4">
                        <h1 class="text-5xl lg:text-6xl font-bold text-foreground leading-tight">
                            {OWNER}
                        </h1>
                        <p class="text-xl lg:text-2xl text-muted-foreground font-light">
                            "Chemical Engineering Student | Researcher | Machine Learning Enthusiast"
                        </p>
                    </div>
                    <p class="text-lg text-muted-foreground leading-relaxed max-w-xl">
                        "A final-year Chemical Engineering student at IIT Madras with a passion for applying machine learning and computational modeling to solve complex problems in bioreactor design and neuroplasticity. Seeking opportunities to leverage my skills in challenging research or engineering roles."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <A
                            href="/projects"
                            attr:class="group inline-flex items-center justify-center gap-2 px-6 py-3 rounded-lg bg-primary text-primary-foreground font-medium shadow-lg hover:bg-primary/90"
                        >
                            "View My Work"
                            <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                        </A>
                        <a
                            href=CV_PATH
                            download="AntonyRoshan_CV.pdf"
                            class="group inline-flex items-center justify-center gap-2 px-6 py-3 rounded-lg border border-border font-medium hover:bg-muted"
                        >
                            <i class="extra-download group-hover:scale-110 transition-transform" />
                            "Download CV"
                        </a>
                    </div>
                    <div class="flex flex-wrap gap-8 pt-8">
                        <Stat value="#1" label="Ranked in Cohort" />
                        <Stat value="IIT Madras" label="Chemical Engineering" />
                        <Stat value="2024" label="Expected Graduate" />
                    </div>
                </div>
                <div class="flex justify-center lg:justify-end">
                    <div class="relative">
                        <div class="absolute inset-0 bg-hero-gradient rounded-3xl blur-2xl opacity-30 scale-105"></div>
                        <img
                            src="/antony-headshot.jpg"
                            alt=format!("{OWNER} - Professional Headshot")
                            class="relative w-80 h-80 object-cover rounded-3xl shadow-glow"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(project: &'static FeaturedProject) -> impl IntoView {
    let (card, badge, glyph) = if project.highlight {
        ("bg-card-gradient ring-2 ring-primary/10", "bg-primary/10", "text-primary")
    } else {
        ("bg-card", "bg-muted", "text-muted-foreground")
    };

    view! {
        <article class=format!(
            "p-8 rounded-xl shadow-card transition-all duration-300 hover:shadow-hover hover:-translate-y-2 {card}",
        )>
            <div class="space-y-6">
                <div class="flex items-start justify-between">
                    <div class=format!("p-3 rounded-xl {badge}")>
                        <span class=format!("text-2xl {glyph}") aria-hidden="true">
                            {project.icon.glyph()}
                        </span>
                    </div>
                    <span class="text-xs font-medium text-muted-foreground bg-muted px-3 py-1 rounded-full">
                        {project.category}
                    </span>
                </div>
                <div class="space-y-3">
                    <h3 class="text-xl font-semibold text-foreground leading-tight">
                        {project.title}
                    </h3>
                    <p class="text-muted-foreground leading-relaxed">{project.description}</p>
                    <p class="text-sm text-primary font-medium">{project.duration}</p>
                </div>
            </div>
        </article>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section class="py-20 px-4 sm:px-6 lg:px-8 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <div class="text-center space-y-4 mb-16">
                    <h2 class="text-4xl font-bold text-foreground">"Featured Projects"</h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Explore my research and professional work in chemical engineering, machine learning, and process optimization."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-12">
                    {FEATURED_PROJECTS
                        .iter()
                        .map(|project| view! { <FeaturedCard project /> })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <A
                        href="/projects"
                        attr:class="group inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-primary text-primary-foreground font-medium shadow-lg hover:bg-primary/90"
                    >
                        "View All Projects"
                        <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                    </A>
                </div>
            </div>
        </section>
    }
}
