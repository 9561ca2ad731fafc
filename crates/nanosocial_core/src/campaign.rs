//! Saved campaign snapshots.

use crate::GeneratedContentResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved snapshot of one generation run.
///
/// Serialized as `{id, topic, language, timestamp, data}` with `timestamp`
/// in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SavedCampaign {
    /// Unique, time-derived identifier
    id: String,
    /// Topic the posts were generated for
    topic: String,
    /// Target language label
    language: String,
    /// Creation time, epoch milliseconds
    timestamp: i64,
    /// The generated posts and creative brief
    data: GeneratedContentResponse,
}

impl SavedCampaign {
    /// Create a campaign snapshot. `data` is owned, so the snapshot shares
    /// nothing with the caller's live content.
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        language: impl Into<String>,
        timestamp: i64,
        data: GeneratedContentResponse,
    ) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            language: language.into(),
            timestamp,
            data,
        }
    }

    /// Creation time as a UTC datetime, if the stored timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
