//! In-process record store.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::{PhotoId, RecordStore, StoreError, StoredRecord};

/// A record store backed by a map. Can be told to fail, which makes it
/// useful for exercising the session's recovery paths.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RefCell<HashMap<PhotoId, StoredRecord>>,
    failing_reads: RefCell<HashSet<PhotoId>>,
    fail_writes: Cell<bool>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload as-is, bypassing serialization.
    pub fn insert_raw(&self, photo_id: PhotoId, payload: impl Into<String>) {
        self.records.borrow_mut().insert(
            photo_id,
            StoredRecord {
                photo_id,
                payload: payload.into(),
                updated_at: 0,
            },
        );
    }

    /// Copy of the current record for a photo.
    pub fn record(&self, photo_id: PhotoId) -> Option<StoredRecord> {
        self.records.borrow().get(&photo_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Make reads of `photo_id` fail with [`StoreError::Unavailable`].
    pub fn fail_reads_for(&self, photo_id: PhotoId) {
        self.failing_reads.borrow_mut().insert(photo_id);
    }

    /// Make every write fail until switched off again.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl RecordStore for MemoryRecordStore {
    async fn read(&self, photo_id: PhotoId) -> Result<Option<StoredRecord>, StoreError> {
        if self.failing_reads.borrow().contains(&photo_id) {
            return Err(StoreError::Unavailable(format!("read of photo {}", photo_id)));
        }
        Ok(self.record(photo_id))
    }

    async fn upsert(&self, record: StoredRecord) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable(format!(
                "write of photo {}",
                record.photo_id
            )));
        }
        self.records.borrow_mut().insert(record.photo_id, record);
        Ok(())
    }
}
