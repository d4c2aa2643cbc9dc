pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::{error::StoreError, models::hotel::Hotel};

/// Key-value persistence for hotel records, keyed by hotel id.
///
/// Implementations only need `read`, `write` and `scan`; the lookups the
/// repository relies on are derived from a full scan. None of these
/// operations are atomic with respect to each other.
pub trait RecordStore: Send + Sync {
    fn read(&self, id: u64) -> Result<Option<Hotel>, StoreError>;

    /// Stores `hotel` under `id`, replacing whatever was there.
    fn write(&self, id: u64, hotel: &Hotel) -> Result<(), StoreError>;

    /// Every stored record, ascending by id.
    fn scan(&self) -> Result<Vec<Hotel>, StoreError>;

    fn exists(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.read(id)?.is_some())
    }

    /// `max(id) + 1` over all stored records, or 1 for an empty store.
    fn next_id(&self) -> Result<u64, StoreError> {
        let max_id = self.scan()?.iter().map(|hotel| hotel.id).max();
        Ok(max_id.map_or(1, |id| id + 1))
    }

    /// Linear scan for the first hotel carrying `slug`.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Hotel>, StoreError> {
        Ok(self.scan()?.into_iter().find(|hotel| hotel.slug == slug))
    }
}
