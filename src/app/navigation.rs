use leptos::{
    ev::{self, KeyboardEvent},
    html,
    prelude::*,
};
use leptos_router::{components::*, hooks::use_location};
use log::debug;
use wasm_bindgen::JsCast;

use crate::{
    content::OWNER,
    nav::{
        is_active, is_nav_visible, DrawerEvent, DrawerState, FocusTrap, FOCUSABLE_SELECTOR,
        NAV_LINKS,
    },
    scroll::DEFAULT_THRESHOLD,
};

use super::{
    hooks::{use_prefers_reduced_motion, use_scroll_direction},
    theme::ThemeToggle,
};

fn focusable_elements(root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Lock page scroll, returning the inline `overflow` value to restore later.
fn lock_body_scroll() -> Option<String> {
    let style = document().body()?.style();
    let prev = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    Some(prev)
}

fn restore_body_scroll(prev: &str) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", prev);
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let scroll = use_scroll_direction(DEFAULT_THRESHOLD);
    let reduced_motion = use_prefers_reduced_motion();
    let location = use_location();
    let (drawer, set_drawer) = signal(DrawerState::Closed);
    let drawer_ref = NodeRef::<html::Nav>::new();
    let keydown_handle = StoredValue::new_local(None::<WindowListenerHandle>);
    let saved_overflow = StoredValue::new(None::<String>);

    let dispatch = move |event: DrawerEvent| {
        set_drawer.update(|state| {
            let next = state.apply(event);
            if next != *state {
                debug!("drawer {:?} -> {:?} on {:?}", *state, next, event);
            }
            *state = next;
        });
    };

    // never land on a new page with the drawer open
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| dispatch(DrawerEvent::RouteChange),
        false,
    );

    let keydown_handler = move |ev: KeyboardEvent| match ev.key().as_ref() {
        "Escape" => dispatch(DrawerEvent::Escape),
        "Tab" => {
            let Some(root) = drawer_ref.get_untracked() else {
                return;
            };
            let focusable = focusable_elements(&root);
            let trap = FocusTrap::new(focusable.len());
            let active = document().active_element();
            let active = active.and_then(|a| {
                focusable.iter().position(|el| {
                    let el: &web_sys::Element = el.as_ref();
                    *el == a
                })
            });
            if let Some(i) = trap.on_tab(active, ev.shift_key()) {
                ev.prevent_default();
                let _ = focusable[i].focus();
            }
        }
        _ => {}
    };

    let release = move || {
        keydown_handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.remove();
            }
        });
        saved_overflow.update_value(|prev| {
            if let Some(prev) = prev.take() {
                restore_body_scroll(&prev);
            }
        });
    };

    Effect::watch(
        move || drawer.get(),
        move |state, prev, _| {
            if prev == Some(state) {
                return;
            }
            if state.is_open() {
                saved_overflow.set_value(lock_body_scroll());
                keydown_handle.set_value(Some(window_event_listener(ev::keydown, keydown_handler)));
                // the drawer mounts in the same tick; focus once it is in the DOM
                request_animation_frame(move || {
                    let Some(root) = drawer_ref.get_untracked() else {
                        return;
                    };
                    let focusable = focusable_elements(&root);
                    if let Some(i) = FocusTrap::new(focusable.len()).initial() {
                        let _ = focusable[i].focus();
                    }
                });
            } else {
                release();
            }
        },
        false,
    );
    on_cleanup(release);

    let visible = move || is_nav_visible(&scroll.get());
    let transition = move || {
        if reduced_motion.get() {
            "duration-[10ms]"
        } else {
            "duration-300"
        }
    };
    let is_current = move |href: &str| is_active(href, &location.pathname.get());

    view! {
        <a
            href="#main-content"
            class="sr-only focus:not-sr-only focus:absolute focus:top-4 focus:left-4 bg-primary text-primary-foreground px-4 py-2 rounded-md z-[100]"
        >
            "Skip to main content"
        </a>
        <nav
            role="navigation"
            aria-label="Primary"
            class=move || {
                format!(
                    "fixed top-0 w-full bg-background/70 backdrop-blur-md border-b border-border/50 z-50 shadow-sm transition-all ease-in-out {} {}",
                    transition(),
                    if visible() { "translate-y-0 opacity-100" } else { "-translate-y-full opacity-0" },
                )
            }
        >
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center py-4">
                    <A
                        href="/"
                        attr:class="text-xl font-semibold text-foreground hover:text-primary transition-colors"
                    >
                        {OWNER}
                    </A>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <a
                                        href=href
                                        aria-current=move || is_current(href).then_some("page")
                                        class=move || {
                                            if is_current(href) {
                                                "relative text-sm font-medium py-2 px-1 link-underline text-primary border-b-2 border-primary"
                                            } else {
                                                "relative text-sm font-medium py-2 px-1 link-underline text-muted-foreground hover:text-foreground"
                                            }
                                        }
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden">
                        <button
                            type="button"
                            class="p-2 rounded-md hover:bg-muted"
                            on:click=move |_| dispatch(DrawerEvent::Toggle)
                            aria-label=move || {
                                if drawer.get().is_open() { "Close menu" } else { "Open menu" }
                            }
                            aria-expanded=move || drawer.get().is_open().to_string()
                            aria-controls="mobile-menu"
                        >
                            <span class="block text-2xl leading-none">
                                {move || if drawer.get().is_open() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>
        </nav>
        <Show when=move || drawer.get().is_open()>
            <div
                class="fixed inset-0 bg-black/50 z-[110] md:hidden"
                on:click=move |_| dispatch(DrawerEvent::BackdropClick)
            ></div>
            <nav
                id="mobile-menu"
                role="dialog"
                aria-modal="true"
                node_ref=drawer_ref
                class="fixed right-0 top-0 h-full w-80 max-w-[85vw] bg-background border-l-2 border-border z-[120] md:hidden overflow-y-auto shadow-2xl"
            >
                <div class="p-6">
                    <div class="flex justify-between items-center mb-8">
                        <span class="text-xl font-semibold">"Menu"</span>
                        <button
                            type="button"
                            class="p-2 rounded-md hover:bg-muted"
                            on:click=move |_| dispatch(DrawerEvent::Close)
                            aria-label="Close menu"
                        >
                            "✕"
                        </button>
                    </div>
                    <ul class="space-y-4">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            on:click=move |_| dispatch(DrawerEvent::LinkClick)
                                            class=move || {
                                                if is_current(href) {
                                                    "block py-3 px-4 rounded-lg text-base font-medium bg-primary/10 text-primary"
                                                } else {
                                                    "block py-3 px-4 rounded-lg text-base font-medium text-muted-foreground hover:text-foreground hover:bg-muted"
                                                }
                                            }
                                        >
                                            {link.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="mt-8 pt-8 border-t border-border flex justify-center">
                        <ThemeToggle />
                    </div>
                </div>
            </nav>
        </Show>
    }
}
