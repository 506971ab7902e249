//! Injectable preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `localStorage` directly; they go through
//! [`PreferenceStore`] so the same logic runs against [`BrowserStore`] in the
//! browser and [`MemoryStore`] in native tests and server rendering.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// String key-value store for small UI preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Best-effort; failures are swallowed so
    /// the UI keeps working session-only when storage is unavailable.
    fn set(&self, key: &str, value: &str);
}

/// `localStorage`-backed store. Requires a browser environment; outside one
/// (SSR, native tests) reads return `None` and writes are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                log::debug!("preference write skipped: localStorage unavailable");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::debug!("preference write failed: storage disabled or full");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}
