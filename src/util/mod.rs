//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the latter stays testable without a browser.

pub mod dark_mode;
pub mod prefs;
