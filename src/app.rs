//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;
use crate::util::prefs::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared theme context and renders the toggle control once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    // Effects only run in the live browser, never during server rendering,
    // so this is the document-ready hook: read the stored preference, mark
    // the body, seed the signal the control renders from.
    Effect::new(move |_| {
        theme.set(dark_mode::init(&BrowserStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/theme-toggle.css"/>
        <Title text="Theme Toggle"/>

        <main class="page">
            <h1>"Theme Toggle"</h1>
            <p>"Use the control in the corner to switch between light and dark."</p>
            <ThemeToggle/>
        </main>
    }
}
