//! Durable single-slot holder of the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation keeps the token under one `localStorage` key so
//! it survives reloads. Tabs sharing that storage are not coordinated; the
//! last writer wins.
//!
//! TRADE-OFFS
//! ==========
//! Storage writes are best-effort. A failed write (quota, private mode) is
//! logged and the session simply will not survive the next reload.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the credential token.
pub const TOKEN_KEY: &str = "token";

/// Holds zero or one credential tokens.
pub trait SessionStore {
    /// Return the stored token, if any.
    fn read(&self) -> Option<String>;

    /// Replace any stored token with `token`.
    fn write(&self, token: &str);

    /// Remove the token. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// Token slot backed by the browser's `localStorage`.
///
/// Off-browser every read is empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not persist");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not cleared");
                return;
            };
            if storage.remove_item(TOKEN_KEY).is_err() {
                log::warn!("failed to clear session token");
            }
        }
    }
}

/// In-process token slot used off-browser and by tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
