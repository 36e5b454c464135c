use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_meta::Title;

use crate::content::{
    categories, filter_by_category, skill_preview, Project, ALL_CATEGORIES, CERTIFICATIONS,
    PROJECTS,
};

const SKILLS_ON_FRONT: usize = 3;
const ACHIEVEMENTS_ON_BACK: usize = 3;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (active, set_active) = signal(ALL_CATEGORIES);
    let visible = move || filter_by_category(&PROJECTS, active.get());

    view! {
        <Title text="Projects" />
        <main id="main-content" class="pt-24 pb-16">
            <section class="px-4 sm:px-6 lg:px-8 mb-16">
                <div class="max-w-4xl mx-auto text-center space-y-6">
                    <h1 class="text-5xl font-bold text-foreground">"Research & Projects"</h1>
                    <p class="text-xl text-muted-foreground leading-relaxed">
                        "Comprehensive portfolio of research projects, industry internships, and academic work spanning chemical engineering, machine learning, and biotechnology."
                    </p>
                </div>
            </section>
            <section class="px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto space-y-8">
                    <CategoryFilter active set_active />
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For each=visible key=|project| project.id let:project>
                            <FlipCard project />
                        </For>
                    </div>
                    <Show when=move || visible().is_empty()>
                        <p class="text-center text-muted-foreground">"No projects in this category."</p>
                    </Show>
                </div>
            </section>
            <Certifications />
        </main>
    }
}

#[component]
fn CategoryFilter(
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2" role="group" aria-label="Filter by category">
            {categories(&PROJECTS)
                .into_iter()
                .map(|cat| {
                    let is_active = move || active.get() == cat;
                    view! {
                        <button
                            type="button"
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| {
                                log::debug!("project filter: {cat}");
                                set_active.set(cat);
                            }
                            class=move || {
                                if is_active() {
                                    "px-4 py-2 rounded-full text-sm font-medium border transition-all bg-primary text-primary-foreground border-primary shadow-sm"
                                } else {
                                    "px-4 py-2 rounded-full text-sm font-medium border transition-all bg-background text-foreground border-border hover:bg-muted"
                                }
                            }
                        >
                            {cat}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FlipCard(project: &'static Project) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);
    let (front_skills, hidden_skills) = skill_preview(project.skills, SKILLS_ON_FRONT);

    let on_keydown = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            set_flipped.update(|f| *f = !*f);
        }
    };

    view! {
        <div
            class="group relative h-[480px] w-full [perspective:2000px]"
            role="button"
            tabindex="0"
            aria-pressed=move || flipped.get().to_string()
            aria-label=format!("{}: show details", project.title)
            on:mouseenter=move |_| set_flipped.set(true)
            on:mouseleave=move |_| set_flipped.set(false)
            on:click=move |_| set_flipped.update(|f| *f = !*f)
            on:keydown=on_keydown
        >
            <div
                class="relative h-full w-full [transform-style:preserve-3d] transition-transform duration-700 ease-out"
                class=("[transform:rotateY(180deg)]", move || flipped.get())
            >
                // front
                <div class="absolute inset-0 h-full w-full [backface-visibility:hidden] overflow-hidden rounded-2xl bg-card border border-border shadow-lg group-hover:border-primary/20">
                    <div class="relative h-56 overflow-hidden">
                        <img
                            src=project.image
                            alt=project.title
                            loading="lazy"
                            class="h-full w-full object-cover transition-transform duration-700"
                            class=("scale-110", move || flipped.get())
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-background via-background/50 to-transparent"></div>
                        <span class="absolute top-4 right-4 text-xs px-2 py-1 rounded-full backdrop-blur-sm bg-background/80">
                            {project.category}
                        </span>
                    </div>
                    <div class="absolute bottom-0 left-0 right-0 p-6 space-y-4">
                        <div class="flex items-start gap-4">
                            <div class="p-3 bg-primary/10 rounded-xl flex-shrink-0">
                                <span class="text-xl" aria-hidden="true">{project.icon.glyph()}</span>
                            </div>
                            <div class="flex-1 space-y-2">
                                <h3 class="text-xl font-bold text-foreground line-clamp-2">
                                    {project.title}
                                </h3>
                                <p class="text-sm text-muted-foreground">{project.duration}</p>
                            </div>
                        </div>
                        <p class="text-sm text-muted-foreground line-clamp-3">{project.description}</p>
                        <div class="flex flex-wrap gap-2">
                            {front_skills
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="text-xs px-2 py-0.5 rounded-full border border-border">
                                            {*skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                            {(hidden_skills > 0)
                                .then(|| {
                                    view! {
                                        <span class="text-xs px-2 py-0.5 text-muted-foreground">
                                            {format!("+{hidden_skills}")}
                                        </span>
                                    }
                                })}
                        </div>
                        <span class="text-xs text-muted-foreground">"Hover for details"</span>
                    </div>
                </div>
                // back
                <div class="absolute inset-0 h-full w-full [transform:rotateY(180deg)] [backface-visibility:hidden] rounded-2xl p-6 bg-card border border-border shadow-lg flex flex-col">
                    <div class="flex-1 space-y-5">
                        <div class="space-y-3">
                            <div class="flex items-center gap-3">
                                <div class="p-2 bg-primary/10 rounded-lg">
                                    <span aria-hidden="true">{project.icon.glyph()}</span>
                                </div>
                                <h3 class="text-lg font-bold text-foreground">{project.title}</h3>
                            </div>
                            <div class="space-y-2 text-sm text-muted-foreground">
                                <p>{project.duration}</p>
                                <p class="line-clamp-2">{project.guide}</p>
                            </div>
                        </div>
                        <div class="space-y-3">
                            <h4 class="text-sm font-semibold text-foreground">"Key Achievements"</h4>
                            <ul class="space-y-2">
                                {project
                                    .achievements
                                    .iter()
                                    .take(ACHIEVEMENTS_ON_BACK)
                                    .map(|achievement| {
                                        view! {
                                            <li class="flex items-start gap-2 text-sm text-muted-foreground">
                                                <div class="h-1.5 w-1.5 rounded-full bg-primary mt-1.5 flex-shrink-0"></div>
                                                <span class="line-clamp-2">{*achievement}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="space-y-3">
                            <h4 class="text-sm font-semibold text-foreground">"Technologies"</h4>
                            <div class="flex flex-wrap gap-2">
                                {project
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="text-xs px-2 py-0.5 rounded-full bg-secondary text-secondary-foreground">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <section class="px-4 sm:px-6 lg:px-8 mt-20">
            <div class="max-w-4xl mx-auto p-8 rounded-2xl bg-card shadow-card">
                <h2 class="text-3xl font-bold text-foreground mb-6 text-center">
                    "Certifications & Online Learning"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="space-y-3">
                                    <h3 class="text-lg font-semibold text-foreground">
                                        {group.heading}
                                    </h3>
                                    <ul class="space-y-2 text-muted-foreground">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| view! { <li>{format!("• {item}")}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
