use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

use super::RecordStore;
use crate::{error::StoreError, models::hotel::Hotel};

/// Volatile store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<u64, Hotel>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, id: u64) -> Result<Option<Hotel>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&id).cloned())
    }

    fn write(&self, id: u64, hotel: &Hotel) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(id, hotel.clone());
        Ok(())
    }

    fn scan(&self) -> Result<Vec<Hotel>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.values().cloned().collect())
    }
}
