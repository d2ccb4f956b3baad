//! Dark mode preference persistence.
//!
//! Reads and writes the user's preference in `localStorage`. Applying the
//! theme is the shell's job via `ThemeState`; nothing here touches the
//! document.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! return the default so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ravekidd_dark";

/// Mode used when nothing is stored.
pub const DEFAULT_DARK: bool = true;

/// Read the dark mode preference, falling back to [`DEFAULT_DARK`].
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        match stored.as_deref() {
            Some(val) => parse_preference(val),
            None => DEFAULT_DARK,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_DARK
    }
}

/// Persist the preference for the next visit.
pub fn persist(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, encode_preference(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_preference(raw: &str) -> bool {
    raw == "true"
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_preference(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}
