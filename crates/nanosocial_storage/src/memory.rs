//! In-memory key-value store.

use crate::{KeyValueStore, validate_key};
use nanosocial_error::NanoSocialResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key-value store held in process memory.
///
/// Clones share the same slots, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> NanoSocialResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> NanoSocialResult<()> {
        validate_key(key)?;
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> NanoSocialResult<()> {
        validate_key(key)?;
        self.slots().remove(key);
        Ok(())
    }
}
