//! Session token persistence.
//!
//! The token lives in `localStorage` under [`crate::config::TOKEN_KEY`] so it survives
//! reloads. Workflows take a [`TokenStore`] so they can run against an
//! in-memory store natively; [`BrowserTokenStore`] is the real one and is a
//! no-op outside the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
use crate::config::TOKEN_KEY;

/// Key-value slot holding the opaque session token.
pub trait TokenStore {
    /// Currently stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// `window.localStorage` backed token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist session token");
                }
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
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("failed to remove session token");
                }
            }
        }
    }
}
