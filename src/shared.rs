//! Thread-safe handle over a [`PipelineStore`].
//!
//! All access goes through one mutex, so a reader never sees new entities
//! paired with a stale validation result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::PipelineStore;

/// Cloneable, serialized handle to a single store.
#[derive(Debug, Clone, Default)]
pub struct SharedPipelineStore {
  inner: Arc<Mutex<PipelineStore>>,
}

impl SharedPipelineStore {
  pub fn new(store: PipelineStore) -> Self {
    Self {
      inner: Arc::new(Mutex::new(store)),
    }
  }

  // Store mutations commit in a single assignment, so state behind a
  // poisoned lock is still consistent.
  fn lock(&self) -> MutexGuard<'_, PipelineStore> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Runs `f` with exclusive access; the whole closure is one critical section.
  pub fn update<R>(&self, f: impl FnOnce(&mut PipelineStore) -> R) -> R {
    f(&mut self.lock())
  }

  /// Runs `f` against a consistent view of the store.
  pub fn read<R>(&self, f: impl FnOnce(&PipelineStore) -> R) -> R {
    f(&self.lock())
  }
}

impl From<PipelineStore> for SharedPipelineStore {
  fn from(store: PipelineStore) -> Self {
    Self::new(store)
  }
}
