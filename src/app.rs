mod about;
mod contact;
mod footer;
mod homepage;
mod hooks;
mod navigation;
mod projects;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use projects::ProjectsPage;
use theme::ThemeContext;
use toast::{ToastNotifier, Toaster};

use crate::content::OWNER;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    ThemeContext::provide();
    ToastNotifier::provide();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Navigation />
            <Toaster />
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/projects") view=ProjectsPage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <main id="main-content" class="pt-32 pb-16 text-center">
            <h1 class="text-4xl font-bold mb-4">"Page not found."</h1>
            <a href="/" class="text-primary hover:underline">
                "Back to home"
            </a>
        </main>
    }
}
