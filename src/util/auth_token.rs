//! Durable storage for the session token.
//!
//! The token is written under a fixed `localStorage` key on login and read
//! back when the guarded voting endpoints need an `Authorization` header.
//! Storage is an injected capability rather than ambient global access so
//! tests can swap in an in-memory store.

#[cfg(test)]
#[path = "auth_token_test.rs"]
mod auth_token_test;

use std::sync::Arc;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "authToken";

/// Storage capability for the session token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token store shared through the Leptos context.
pub type SharedTokenStore = Arc<dyn TokenStore + Send + Sync>;

/// `localStorage`-backed store, scoped to the browser origin.
///
/// Storage failures are swallowed; a missing token only means the backend
/// will reject guarded requests. Inert off the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(STORAGE_KEY).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory store for host-target tests.
#[derive(Debug, Default)]
pub struct MemoryTokens(std::sync::Mutex<Option<String>>);

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.0.lock().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = None;
        }
    }
}
