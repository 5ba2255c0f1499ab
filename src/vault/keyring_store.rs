//! OS keystore vault backend.
//!
//! Entry naming follows the reference deployment: the keyring service is
//! `{service}_{key}` and the account name is the key itself, so entries show
//! up individually in the platform credential manager.

use keyring::Entry;

use crate::vault::{SecretVault, VaultError, SERVICE_NAME};

/// Vault backed by the platform keystore via the `keyring` crate.
#[derive(Clone, Debug)]
pub struct KeyringVault {
    service: String,
}

impl KeyringVault {
    /// Creates a vault scoped to the given service identifier.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, VaultError> {
        Entry::new(&format!("{}_{}", self.service, key), key)
            .map_err(|e| VaultError::Backend(e.to_string()))
    }
}

impl Default for KeyringVault {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl SecretVault for KeyringVault {
    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        match self.entry(key)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(VaultError::Unavailable(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), VaultError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| VaultError::Unavailable(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), VaultError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(VaultError::Unavailable(e.to_string())),
        }
    }
}
