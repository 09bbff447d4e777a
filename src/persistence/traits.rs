//! The record store collaborator.

use std::future::Future;

use super::{PhotoId, StoreError, StoredRecord};

/// Key/value access to persisted annotation records.
///
/// Backends are typically an embedded SQL table with an upsert on the photo
/// id. Both calls are atomic per record.
pub trait RecordStore {
    /// Fetch the record for a photo. `Ok(None)` means no record exists.
    fn read(
        &self,
        photo_id: PhotoId,
    ) -> impl Future<Output = Result<Option<StoredRecord>, StoreError>>;

    /// Insert the record, replacing any existing one for the same photo.
    fn upsert(&self, record: StoredRecord) -> impl Future<Output = Result<(), StoreError>>;
}
