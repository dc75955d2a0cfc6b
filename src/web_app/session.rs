// web_app/session.rs - Session token storage
//
// Screens that need the credential receive a `Session` through context
// instead of touching browser storage directly, so tests and SSR can swap in
// an in-memory store.

use std::fmt;
use std::sync::{Arc, RwLock};

/// Durable storage for the single session credential
///
/// Storage failures are not surfaced to callers; implementations log them.
pub trait TokenStore: Send + Sync {
    fn set_token(&self, token: &str);
    fn token(&self) -> Option<String>;
    fn clear_token(&self);
}

/// In-memory store used during SSR and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_token(&self, token: &str) {
        match self.token.write() {
            Ok(mut guard) => *guard = Some(token.to_string()),
            Err(e) => tracing::warn!("Token store lock poisoned: {}", e),
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Browser `localStorage` backed store
///
/// Holds no handle itself; the storage object is looked up on every call
/// because `web_sys::Storage` cannot be shared across threads.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokenStore {
    fn set_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(crate::web_app::config::TOKEN_STORAGE_KEY, token) {
            tracing::warn!("Failed to persist session token: {:?}", e);
        }
    }

    fn token(&self) -> Option<String> {
        Self::storage()?
            .get_item(crate::web_app::config::TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(crate::web_app::config::TOKEN_STORAGE_KEY) {
                tracing::warn!("Failed to clear session token: {:?}", e);
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        fn platform_store() -> LocalStorageTokenStore {
            LocalStorageTokenStore
        }
    } else {
        fn platform_store() -> MemoryTokenStore {
            MemoryTokenStore::new()
        }
    }
}

/// Handle to the current-session credential, shared through Leptos context
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// The store appropriate for the current build: `localStorage` in the
    /// browser, memory on the server.
    pub fn for_platform() -> Self {
        Self::new(platform_store())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set_token(token);
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn clear(&self) {
        self.store.clear_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::for_platform()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
