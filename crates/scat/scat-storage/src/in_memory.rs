use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use scat_core::errors::{ScatResult, StorageError};
use scat_core::IProgressStore;

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> ScatResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::LockPoisoned.into())
    }
}

impl IProgressStore for InMemoryProgressStore {
    fn get(&self, key: &str) -> ScatResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, payload: &str) -> ScatResult<()> {
        self.lock()?.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ScatResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
