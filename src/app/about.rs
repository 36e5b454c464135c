use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{TimelineEvent, RESEARCH_INTERESTS, TIMELINE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <main id="main-content" class="pt-24 pb-16">
            <section class="px-4 sm:px-6 lg:px-8 mb-16">
                <div class="max-w-4xl mx-auto text-center space-y-6">
                    <h1 class="text-5xl font-bold text-foreground">"About Me"</h1>
                    <p class="text-xl text-muted-foreground leading-relaxed">
                        "Passionate about bridging chemical engineering principles with cutting-edge machine learning to solve complex problems in bioprocess design and neurological modeling."
                    </p>
                </div>
            </section>
            <section class="px-4 sm:px-6 lg:px-8 mb-16">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold text-foreground mb-12 text-center">
                        "Academic Journey"
                    </h2>
                    <Timeline />
                </div>
            </section>
            <section class="px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl font-bold text-foreground mb-8">"Research Interests"</h2>
                    <ul class="flex flex-wrap justify-center gap-3">
                        {RESEARCH_INTERESTS
                            .iter()
                            .map(|interest| {
                                view! {
                                    <li class="px-4 py-2 text-sm rounded-full bg-secondary text-secondary-foreground">
                                        {*interest}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
        </main>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-border"></div>
            <ol class="space-y-8">
                {TIMELINE.iter().map(|event| view! { <TimelineItem event /> }).collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn TimelineItem(event: &'static TimelineEvent) -> impl IntoView {
    view! {
        <li class="relative flex items-start space-x-6">
            <div class=format!(
                "relative z-10 flex items-center justify-center w-16 h-16 rounded-full shadow-lg {}",
                event.kind.badge_class(),
            )>
                <span class="text-2xl" aria-hidden="true">
                    {event.kind.glyph()}
                </span>
            </div>
            <div class="flex-1 min-w-0 pb-8">
                <div class="p-6 rounded-xl bg-card shadow-card hover:shadow-hover transition-all duration-300">
                    <span class="inline-block mb-3 text-sm font-medium text-primary bg-primary/10 px-3 py-1 rounded-full">
                        {event.year}
                    </span>
                    <h3 class="text-xl font-semibold text-foreground mb-2">{event.title}</h3>
                    <p class="text-muted-foreground leading-relaxed">{event.description}</p>
                </div>
            </div>
        </li>
    }
}
