// Copyright 2025 quickpaste developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Secret storage behind the OS keystore.
//!
//! The vault is an external collaborator: this crate only reads, writes and
//! deletes opaque text entries, namespaced by a fixed service identifier plus
//! a per-slot key name. Encryption at rest is entirely the keystore's
//! responsibility (Windows Credential Manager, macOS Keychain, Linux Secret
//! Service).
//!
//! `SecretVault` is a trait so the paste pipeline can be exercised against an
//! in-memory store without touching real OS secure storage.

mod keyring_store;
mod memory;

use thiserror::Error;

pub use keyring_store::KeyringVault;
pub use memory::InMemoryVault;

/// Service identifier prefixing every vault entry name.
pub const SERVICE_NAME: &str = "QuickPasteLocal";

/// Errors surfaced by vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The keystore could not be reached or refused the operation.
    #[error("Secret store unavailable: {0}")]
    Unavailable(String),
    /// The keystore rejected the entry itself (bad name, platform limit).
    #[error("Secret store rejected entry: {0}")]
    Backend(String),
}

/// Opaque key/value secret store.
///
/// Secrets are never cached by callers; every activation re-fetches, so
/// external mutations take effect immediately without restart.
pub trait SecretVault: Send + Sync {
    /// Reads a secret. Absent entries are `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, VaultError>;

    /// Stores a secret, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), VaultError>;

    /// Deletes a secret. Deleting an absent entry is a no-op.
    fn delete(&self, key: &str) -> Result<(), VaultError>;
}
