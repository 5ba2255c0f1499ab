//! In-memory vault for tests and offline use.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::vault::{SecretVault, VaultError};

/// Thread-safe in-memory secret store.
///
/// Substitutes for the OS keystore in tests; behaves identically to
/// `KeyringVault` from the pipeline's point of view.
#[derive(Debug, Default)]
pub struct InMemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryVault {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SecretVault for InMemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), VaultError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), VaultError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_as_none() {
        let vault = InMemoryVault::new();
        assert_eq!(vault.get("str1").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let vault = InMemoryVault::new();
        vault.set("str1", "hunter2").unwrap();
        assert_eq!(vault.get("str1").unwrap().as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_set_overwrites() {
        let vault = InMemoryVault::new();
        vault.set("str1", "old").unwrap();
        vault.set("str1", "new").unwrap();
        assert_eq!(vault.get("str1").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let vault = InMemoryVault::new();
        vault.set("str1", "value").unwrap();
        vault.delete("str1").unwrap();
        vault.delete("str1").unwrap();
        assert_eq!(vault.get("str1").unwrap(), None);
    }
}
