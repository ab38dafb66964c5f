//! Durable client-side storage.

use crate::SessionError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe client storage backed by Spin's Key-Value Store.
///
/// Holds the small number of values that survive across sessions, keyed by
/// name and stored as JSON. Non-WASM builds keep values in an in-memory map
/// with the same semantics.
pub struct ClientStore {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    entries: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

#[cfg(target_arch = "wasm32")]
impl ClientStore {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, SessionError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| SessionError::Open(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.store.get(key) {
            Ok(Some(bytes)) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(SessionError::Store(e.to_string())),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec(value)?;
        self.store
            .set(key, &bytes)
            .map_err(|e| SessionError::Store(e.to_string()))
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), SessionError> {
        self.store
            .delete(key)
            .map_err(|e| SessionError::Store(e.to_string()))
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, SessionError> {
        self.store
            .exists(key)
            .map_err(|e| SessionError::Store(e.to_string()))
    }
}

// In-memory backend for non-WASM builds (testing/development).
#[cfg(not(target_arch = "wasm32"))]
impl ClientStore {
    /// Open the default store.
    pub fn open_default() -> Result<Self, SessionError> {
        Ok(Self {
            entries: std::sync::Mutex::new(std::collections::HashMap::new()),
        })
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        match entries.get(key) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec(value)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        entries.insert(key.to_string(), bytes);
        Ok(())
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, SessionError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(entries.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = ClientStore::open_default().unwrap();
        store.set("cart_code", &"k3J9vQ2xLm0").unwrap();

        let value: Option<String> = store.get("cart_code").unwrap();
        assert_eq!(value.as_deref(), Some("k3J9vQ2xLm0"));
    }

    #[test]
    fn test_get_missing_key() {
        let store = ClientStore::open_default().unwrap();
        let value: Option<String> = store.get("absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_overwrite() {
        let store = ClientStore::open_default().unwrap();
        store.set("key", &1_i64).unwrap();
        store.set("key", &2_i64).unwrap();

        let value: Option<i64> = store.get("key").unwrap();
        assert_eq!(value, Some(2));
    }

    #[test]
    fn test_delete_and_exists() {
        let store = ClientStore::open_default().unwrap();
        store.set("access", &"token").unwrap();
        assert!(store.exists("access").unwrap());

        store.delete("access").unwrap();
        assert!(!store.exists("access").unwrap());

        let value: Option<String> = store.get("access").unwrap();
        assert!(value.is_none());
    }
}
