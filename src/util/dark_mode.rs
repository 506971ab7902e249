//! Dark mode initialization and toggle.
//!
//! Reads the preference from a [`PreferenceStore`] and applies the
//! `.dark-mode` class to the `<body>` element. Toggle writes the new value
//! back and updates the class. Class manipulation requires a browser
//! environment; off-browser it safely no-ops to keep server rendering
//! deterministic.

use crate::state::theme::{STORAGE_KEY, ThemeState};
use crate::util::prefs::PreferenceStore;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class marking the body as dark. CSS keys off this alone.
pub const MARKER_CLASS: &str = "dark-mode";

/// Read the stored preference.
///
/// Dark only when the stored value is exactly `"enabled"`; an absent key or
/// any other value means the default light theme.
pub fn read_preference(store: &impl PreferenceStore) -> ThemeState {
    ThemeState::from_stored(store.get(STORAGE_KEY).as_deref())
}

/// Add or remove the `.dark-mode` class on the `<body>` element.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let class_list = body.class_list();
            if theme.dark {
                let _ = class_list.add_1(MARKER_CLASS);
            } else {
                let _ = class_list.remove_1(MARKER_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Startup behavior: read the stored preference and reflect it on the body.
pub fn init(store: &impl PreferenceStore) -> ThemeState {
    let theme = read_preference(store);
    apply(theme);
    theme
}

/// Toggle the theme, update the body class, and persist the new preference.
pub fn toggle(store: &impl PreferenceStore, current: ThemeState) -> ThemeState {
    let next = current.toggled();
    apply(next);
    store.set(STORAGE_KEY, next.stored_value());
    next
}
