//! Browser storage helpers for small persisted preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior for
//! `localStorage` (language preference) and `sessionStorage` (post-login
//! redirect) so components never repeat web-sys glue. SSR paths no-op.

#[cfg(feature = "hydrate")]
fn local() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn session() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Load a string from `localStorage` for `key`.
pub fn load_local(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a string to `localStorage` for `key`.
pub fn save_local(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Save a string to `sessionStorage` for `key`.
pub fn save_session(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Read and remove a string from `sessionStorage` for `key`.
pub fn take_session(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = session()?;
        let value = storage.get_item(key).ok().flatten()?;
        let _ = storage.remove_item(key);
        Some(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
