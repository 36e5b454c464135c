use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Site-wide colour scheme. One instance per app so every toggle stays in sync.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn provide() {
        #[cfg(feature = "hydrate")]
        let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        #[cfg(not(feature = "hydrate"))]
        let (theme, set_theme) = {
            let (theme, set_theme) = signal(Theme::default());
            (Signal::from(theme), set_theme)
        };

        Effect::new(move |_| {
            let dark = theme.get() == Theme::Dark;
            if let Some(root) = document().document_element() {
                let _ = root.class_list().toggle_with_force("dark", dark);
            }
        });

        provide_context(Self { theme, set_theme });
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {:?}", next);
        self.set_theme.set(next);
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let is_dark = move || ctx.theme.get() == Theme::Dark;

    view! {
        <button
            type="button"
            class="relative w-10 h-10 inline-flex items-center justify-center rounded-md hover:bg-muted transition-colors"
            on:click=move |_| ctx.toggle()
            aria-label=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            <span
                class="text-lg transition-transform duration-300"
                class=("rotate-180", is_dark)
            >
                {move || if is_dark() { "☾" } else { "☀" }}
            </span>
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn theme_round_trips_as_lowercase_json() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
