//! Persistence for NanoSocial.
//!
//! Two layers:
//! - [`KeyValueStore`] is the string slot substrate, with filesystem and
//!   in-memory backends.
//! - [`CampaignStore`] keeps the saved campaign list as one JSON document in
//!   a fixed slot.
//!
//! # Example
//!
//! ```rust
//! use nanosocial_storage::{CampaignStore, MemoryKeyValueStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CampaignStore::new(MemoryKeyValueStore::new());
//! assert!(store.load_all().await.is_empty());
//!
//! store.save_all(&[]).await?;
//! assert!(store.load_all().await.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod campaign;
mod filesystem;
mod memory;

pub use campaign::{CAMPAIGNS_KEY, CampaignStore};
pub use filesystem::FileSystemKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use nanosocial_error::{StorageError, StorageErrorKind};

use nanosocial_error::NanoSocialResult;

/// A string-keyed slot store.
///
/// Writes replace the whole value. Implementations need not support
/// concurrent writers from other processes.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. Returns `None` when the slot has never been written.
    async fn get(&self, key: &str) -> NanoSocialResult<Option<String>>;

    /// Write a slot, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> NanoSocialResult<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    async fn remove(&self, key: &str) -> NanoSocialResult<()>;
}

/// Reject keys that cannot be used as a single path component.
pub(crate) fn validate_key(key: &str) -> NanoSocialResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if !valid {
        return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
    }
    Ok(())
}
