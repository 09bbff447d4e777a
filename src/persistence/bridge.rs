//! Translation between session state and the record store.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::model::{Stroke, StrokeIdAllocator, TextNote};

use super::{
    AnnotationPayload, AnnotationSet, PersistenceError, PhotoId, RecordStore, StoredRecord,
};

/// Loads and saves one image's annotations by photo id.
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    store: S,
}

impl<S: RecordStore> PersistenceBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the annotations stored for a photo.
    ///
    /// A missing, unreadable or invalid record all come back as `None`; the
    /// caller treats them the same as "never annotated".
    pub async fn load(
        &self,
        photo_id: PhotoId,
        ids: &mut StrokeIdAllocator,
    ) -> Option<AnnotationSet> {
        let record = match self.store.read(photo_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read annotations for photo {}: {}", photo_id, e);
                return None;
            }
        };

        match AnnotationPayload::from_json(&record.payload) {
            Ok(payload) => Some(payload.into_annotations(ids)),
            Err(e) => {
                log::warn!("Ignoring annotations for photo {}: {}", photo_id, e);
                None
            }
        }
    }

    /// Serialize and upsert the annotations of a photo, stamping the time.
    ///
    /// Anything `load` would reject is refused here instead, so a successful
    /// save always reads back.
    pub async fn save(
        &self,
        photo_id: PhotoId,
        strokes: &[Stroke],
        notes: &[TextNote],
    ) -> Result<(), PersistenceError> {
        let payload = AnnotationPayload::from_annotations(strokes, notes);
        payload.validate()?;
        let payload = payload.to_json()?;
        let record = StoredRecord {
            photo_id,
            payload,
            updated_at: now_millis(),
        };

        self.store.upsert(record).await?;
        log::info!(
            "Saved {} strokes and {} notes for photo {}",
            strokes.len(),
            notes.len(),
            photo_id
        );
        Ok(())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
