use std::rc::Rc;
use thiserror::Error;
use web_sys::{Storage, Window};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("localStorage is not available")]
    Unavailable,
    #[error("Failed to write `{0}` to storage")]
    Write(String),
    #[error("Failed to remove `{0}` from storage")]
    Remove(String),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// Persisted token slots. The two session keys are always cleared together.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn store_session(&self, access: &str, refresh: Option<&str>) -> Result<(), StorageError> {
        self.set(ACCESS_TOKEN_KEY, access)?;
        if let Some(refresh) = refresh {
            self.set(REFRESH_TOKEN_KEY, refresh)?;
        }
        Ok(())
    }

    fn clear_session(&self) -> Result<(), StorageError> {
        let access = self.remove(ACCESS_TOKEN_KEY);
        let refresh = self.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }
}

/// Browser localStorage backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: &str, refresh: Option<&str>) -> Self {
        let store = Self::new();
        let _ = store.store_session(access, refresh);
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// The store used by the running application: localStorage in the browser,
/// an in-memory map everywhere else.
pub fn default_token_store() -> Rc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_session_tokens() {
        let store = MemoryStore::new();
        store.store_session("access-1", Some("refresh-1")).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn clear_session_removes_both_keys() {
        let store = MemoryStore::with_tokens("a", Some("r"));
        store.clear_session().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn store_session_without_refresh_keeps_previous_refresh() {
        let store = MemoryStore::with_tokens("a", Some("r"));
        store.store_session("b", None).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("b"));
        assert_eq!(store.refresh_token().as_deref(), Some("r"));
    }

    #[test]
    fn empty_token_is_treated_as_missing() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "").unwrap();
        assert!(store.access_token().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_store_clears_both_slots() {
        let store = LocalStorageStore;
        store.store_session("wasm-access", Some("wasm-refresh")).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("wasm-access"));
        store.clear_session().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
