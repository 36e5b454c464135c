use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::{scroll_progress, BACK_TO_TOP_AFTER, EMAIL, OWNER, SOCIAL_LINKS};

const FALLBACK_YEAR: i32 = 2025;

fn copyright_year(build_year: &str) -> i32 {
    build_year.trim().parse().unwrap_or(FALLBACK_YEAR)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(env!("BUILD_YEAR"));

    view! {
        <footer class="bg-card border-t border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="space-y-4">
                        <h3 class="text-base font-semibold text-foreground">"Contact"</h3>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="flex items-center space-x-2 text-sm text-muted-foreground hover:text-primary transition-colors"
                        >
                            <i class="extra-email" />
                            <span>{EMAIL}</span>
                        </a>
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-base font-semibold text-foreground">"Links"</h3>
                        <div class="flex space-x-3">
                            {SOCIAL_LINKS
                                .iter()
                                .filter(|link| !link.href.starts_with("mailto:"))
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=format!("{} Profile", link.label)
                                            class="p-2 bg-muted hover:bg-primary hover:text-primary-foreground rounded-lg transition-colors"
                                        >
                                            <i class=link.icon_class />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="border-t border-border mt-8 pt-6 text-center">
                    <p class="text-xs text-muted-foreground">{format!("© {year} {OWNER}")}</p>
                </div>
            </div>
            <BackToTop />
        </footer>
    }
}

fn page_progress() -> (f64, f64) {
    let window = window();
    let scrolled = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (scrolled, scroll_progress(scrolled, height, viewport))
}

#[component]
fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let (progress, set_progress) = signal(0.0);

    let refresh = move || {
        let (scrolled, pct) = page_progress();
        set_visible.set(scrolled > BACK_TO_TOP_AFTER);
        set_progress.set(pct);
    };

    Effect::new(move |_| refresh());
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| refresh(),
        UseEventListenerOptions::default().passive(true),
    );

    let to_top = move |_| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    };

    view! {
        <button
            type="button"
            aria-label="Back to top"
            on:click=to_top
            tabindex=move || if visible.get() { "0" } else { "-1" }
            class=move || {
                format!(
                    "fixed bottom-6 right-6 z-50 p-3 rounded-full bg-primary text-primary-foreground shadow-lg hover:shadow-xl transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-primary {}",
                    if visible.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-5 pointer-events-none"
                    },
                )
            }
        >
            <div class="relative">
                <i class="extra-arrow-up block w-5 h-5" />
                <svg class="absolute -inset-1.5" viewBox="0 0 36 36" aria-hidden="true">
                    <path
                        d="M18 2a16 16 0 1 1 0 32 16 16 0 0 1 0-32"
                        fill="none"
                        stroke="currentColor"
                        stroke-opacity="0.2"
                        stroke-width="2"
                    />
                    <path
                        d="M18 2a16 16 0 1 1 0 32 16 16 0 0 1 0-32"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-dasharray="100 100"
                        stroke-dashoffset=move || format!("{:.1}", 100.0 - progress.get())
                    />
                </svg>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_comes_from_build_stamp() {
        assert_eq!(copyright_year("2024"), 2024);
        assert_eq!(copyright_year(env!("BUILD_YEAR")).to_string(), env!("BUILD_YEAR"));
    }

    #[test]
    fn unparseable_year_falls_back() {
        assert_eq!(copyright_year("yesterday"), FALLBACK_YEAR);
    }
}
