#![allow(dead_code)]

use std::sync::Arc;

use scat_core::errors::{ScatResult, StorageError};
use scat_core::{Catalog, IProgressStore, NacDimension, SectionId};
use scat_storage::InMemoryProgressStore;
use scat_wizard::FormStepper;

pub fn catalog() -> Arc<Catalog> {
    Catalog::builtin().unwrap()
}

pub fn memory_store() -> Arc<InMemoryProgressStore> {
    Arc::new(InMemoryProgressStore::new())
}

pub fn stepper() -> FormStepper {
    stepper_with_store(memory_store())
}

pub fn stepper_with_store(store: Arc<dyn IProgressStore>) -> FormStepper {
    FormStepper::new(catalog(), store, "user-1")
}

pub fn cause_ids(section: SectionId) -> Vec<String> {
    catalog()
        .section(section)
        .causes
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

/// Make every cause of `section` complete.
pub fn complete_section(stepper: &mut FormStepper, section: SectionId) {
    for id in cause_ids(section) {
        stepper.mark_cause_complete(&id).unwrap();
        if section == SectionId::Nac {
            for dim in NacDimension::ALL {
                stepper.update_nac_validation(&id, dim, true).unwrap();
            }
        }
    }
}

/// Reads pass through to an in-memory store; every write fails.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: InMemoryProgressStore,
}

impl IProgressStore for ReadOnlyStore {
    fn get(&self, key: &str) -> ScatResult<Option<String>> {
        self.inner.get(key)
    }
    fn put(&self, _key: &str, _payload: &str) -> ScatResult<()> {
        Err(StorageError::LockPoisoned.into())
    }
    fn remove(&self, _key: &str) -> ScatResult<()> {
        Err(StorageError::LockPoisoned.into())
    }
}
