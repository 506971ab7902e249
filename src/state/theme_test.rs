use super::*;

// =============================================================
// Reading stored values
// =============================================================

#[test]
fn stored_enabled_reads_as_dark() {
    assert!(ThemeState::from_stored(Some(ENABLED_VALUE)).dark);
}

#[test]
fn absent_value_reads_as_light() {
    assert!(!ThemeState::from_stored(None).dark);
}

#[test]
fn unrecognized_values_read_as_light() {
    for raw in ["null", "true", "disabled", "ENABLED", ""] {
        assert!(!ThemeState::from_stored(Some(raw)).dark, "value {raw:?}");
    }
}

#[test]
fn default_is_light() {
    assert!(!ThemeState::default().dark);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggled_flips_the_theme() {
    assert!(ThemeState { dark: false }.toggled().dark);
    assert!(!ThemeState { dark: true }.toggled().dark);
}

#[test]
fn double_toggle_is_identity() {
    for dark in [false, true] {
        let theme = ThemeState { dark };
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// Persistence encoding
// =============================================================

#[test]
fn dark_persists_enabled() {
    assert_eq!(ThemeState { dark: true }.stored_value(), ENABLED_VALUE);
}

#[test]
fn light_persists_null_sentinel() {
    assert_eq!(ThemeState { dark: false }.stored_value(), "null");
}

#[test]
fn stored_value_round_trips_through_from_stored() {
    for dark in [false, true] {
        let theme = ThemeState { dark };
        assert_eq!(ThemeState::from_stored(Some(theme.stored_value())), theme);
    }
}

// =============================================================
// Glyphs
// =============================================================

#[test]
fn dark_shows_sun_offering_light() {
    assert_eq!(ThemeState { dark: true }.glyph(), "☀️");
}

#[test]
fn light_shows_moon_offering_dark() {
    assert_eq!(ThemeState { dark: false }.glyph(), "🌙");
}
