//! In-flight request guard
//!
//! Finalizing a sale and confirming a reservation are not idempotent
//! backend calls, and the UI cannot rely on the first response arriving
//! before the button is pressed again. Mutating status endpoints acquire
//! a permit keyed by operation and entity id; a second acquisition while
//! the first permit lives fails fast without a network call.

use crate::{ClientError, ClientResult};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// Keys currently in flight
#[derive(Debug, Clone, Default)]
pub struct InflightSet {
    inner: Arc<DashMap<String, ()>>,
}

impl InflightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a permit for `operation` on entity `id`.
    ///
    /// Fails with [`ClientError::DuplicateRequest`] when a sibling call
    /// holds the permit. The permit releases the key on drop, whether
    /// the guarded call succeeded or failed.
    pub fn begin(&self, operation: &str, id: i64) -> ClientResult<InflightPermit> {
        let key = format!("{}:{}", operation, id);
        match self.inner.entry(key.clone()) {
            Entry::Occupied(_) => {
                tracing::warn!(key = %key, "duplicate request suppressed");
                Err(ClientError::DuplicateRequest(key))
            }
            Entry::Vacant(entry) => {
                entry.insert(());
                Ok(InflightPermit {
                    set: Arc::clone(&self.inner),
                    key,
                })
            }
        }
    }

    pub fn is_inflight(&self, operation: &str, id: i64) -> bool {
        self.inner.contains_key(&format!("{}:{}", operation, id))
    }
}

/// RAII permit; releases its key when dropped
#[derive(Debug)]
pub struct InflightPermit {
    set: Arc<DashMap<String, ()>>,
    key: String,
}

impl Drop for InflightPermit {
    fn drop(&mut self) {
        self.set.remove(&self.key);
    }
}
