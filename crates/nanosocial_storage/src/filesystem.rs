//! Filesystem-backed key-value store.
//!
//! Each slot is one file named after its key inside a base directory.

use crate::{KeyValueStore, validate_key};
use nanosocial_error::{NanoSocialResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Key-value store that keeps one file per slot.
///
/// ```text
/// ~/.local/share/nanosocial/
/// └── nanoSocial_saved_campaigns
/// ```
///
/// Writes go to a hidden temp file that is then renamed over the slot, so a
/// reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileSystemKeyValueStore {
    base_path: PathBuf,
}

impl FileSystemKeyValueStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> NanoSocialResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened filesystem key-value store");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn slot_path(&self, key: &str) -> NanoSocialResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemKeyValueStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> NanoSocialResult<Option<String>> {
        let path = self.slot_path(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                tracing::debug!(path = %path.display(), size = value.len(), "Read slot");
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, value), fields(size = value.len()))]
    async fn set(&self, key: &str, value: &str) -> NanoSocialResult<()> {
        let path = self.slot_path(key)?;
        let temp_path = self.base_path.join(format!(".{}.tmp", key));

        tokio::fs::write(&temp_path, value).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), "Wrote slot");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> NanoSocialResult<()> {
        let path = self.slot_path(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }
}
