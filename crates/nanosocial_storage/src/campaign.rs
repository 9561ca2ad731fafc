//! Saved campaign persistence.

use crate::KeyValueStore;
use nanosocial_core::SavedCampaign;
use nanosocial_error::{NanoSocialResult, StorageError, StorageErrorKind};
use tracing::{debug, instrument, warn};

/// Slot holding the JSON array of saved campaigns.
pub const CAMPAIGNS_KEY: &str = "nanoSocial_saved_campaigns";

/// Reads and writes the whole saved campaign list.
///
/// There is no cache: every call goes through the backing store and JSON.
#[derive(Debug, Clone)]
pub struct CampaignStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CampaignStore<S> {
    /// Wrap a key-value backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The backing key-value store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every saved campaign, most recent first.
    ///
    /// An absent slot, an unreadable slot, or a slot that fails to decode
    /// all yield an empty list; the latter two are logged.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> Vec<SavedCampaign> {
        let raw = match self.backend.get(CAMPAIGNS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read saved campaigns");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SavedCampaign>>(&raw) {
            Ok(campaigns) => {
                debug!(count = campaigns.len(), "Loaded saved campaigns");
                campaigns
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse saved campaigns");
                Vec::new()
            }
        }
    }

    /// Replace the stored list with `campaigns`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if encoding or writing fails.
    #[instrument(skip(self, campaigns), fields(count = campaigns.len()))]
    pub async fn save_all(&self, campaigns: &[SavedCampaign]) -> NanoSocialResult<()> {
        let encoded = serde_json::to_string(campaigns).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(e.to_string()))
        })?;
        self.backend.set(CAMPAIGNS_KEY, &encoded).await?;
        debug!("Saved campaigns");
        Ok(())
    }
}
