//! Pure dark mode preference model.
//!
//! DESIGN
//! ======
//! Everything observable about the toggle (which stored values count as dark,
//! what gets written back, which glyph the control shows) is decided here so
//! the browser glue in `util::dark_mode` stays mechanical.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding the preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Stored value meaning dark mode is on.
pub const ENABLED_VALUE: &str = "enabled";

/// Stored value written by the disable path.
///
/// The original deployment stringified a null here instead of removing the
/// key, so users' browsers already hold `"null"`. We keep writing the same
/// sentinel; anything other than [`ENABLED_VALUE`] reads as light anyway.
pub const DISABLED_VALUE: &str = "null";

/// Current theme: dark or the default light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Interpret a raw stored value. Dark only on an exact `"enabled"` match.
    pub fn from_stored(raw: Option<&str>) -> Self {
        Self {
            dark: raw == Some(ENABLED_VALUE),
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    /// Value to persist for this theme.
    pub fn stored_value(self) -> &'static str {
        if self.dark { ENABLED_VALUE } else { DISABLED_VALUE }
    }

    /// Control glyph: the control always offers the *other* mode, so dark
    /// shows a sun and light shows a moon.
    pub fn glyph(self) -> &'static str {
        if self.dark { "☀️" } else { "🌙" }
    }
}
