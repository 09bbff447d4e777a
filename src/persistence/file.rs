//! Record store keeping one JSON file per photo.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PhotoId, RecordStore, StoreError, StoredRecord};

/// Stores each record as `<dir>/<photo_id>.json`.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, photo_id: PhotoId) -> PathBuf {
        self.dir.join(format!("{}.json", photo_id))
    }
}

impl RecordStore for FileRecordStore {
    async fn read(&self, photo_id: PhotoId) -> Result<Option<StoredRecord>, StoreError> {
        let contents = match fs::read_to_string(self.record_path(photo_id)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: StoredRecord =
            serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                photo_id,
                message: e.to_string(),
            })?;
        Ok(Some(record))
    }

    async fn upsert(&self, record: StoredRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let contents = serde_json::to_string_pretty(&record).map_err(|e| StoreError::Corrupt {
            photo_id: record.photo_id,
            message: e.to_string(),
        })?;

        // Write-then-rename keeps the previous record intact if the write fails
        let path = self.record_path(record.photo_id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)?;
        log::trace!("Wrote {:?}", path);
        Ok(())
    }
}
