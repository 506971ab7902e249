//! Floating dark mode toggle control.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode;
use crate::util::prefs::BrowserStore;

/// Dark mode toggle button.
///
/// Shows a moon while the page is light (offering dark) and a sun while it is
/// dark (offering light). Clicking flips the body class, persists the new
/// preference, and updates the shared theme signal.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="dark-mode-toggle"
            on:click=move |_| {
                let next = dark_mode::toggle(&BrowserStore, theme.get());
                theme.set(next);
            }
            title="Toggle dark mode"
        >
            {move || theme.get().glyph()}
        </button>
    }
}
