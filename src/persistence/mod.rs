//! Annotation persistence.
//!
//! Annotations are persisted per photo, keyed by the photo's stable id
//! rather than its position in the viewer. The record store itself is an
//! external collaborator behind the [`RecordStore`] trait.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use annotation_session::persistence::{MemoryRecordStore, PersistenceBridge};
//!
//! let bridge = PersistenceBridge::new(MemoryRecordStore::new());
//! bridge.save(photo_id, &strokes, &notes).await?;
//! ```

mod bridge;
mod error;
mod file;
mod memory;
mod record;
mod traits;

/// Stable identifier of a photo in the record store.
pub type PhotoId = i64;

pub use bridge::PersistenceBridge;
pub use error::{PersistenceError, StoreError};
pub use file::FileRecordStore;
pub use memory::MemoryRecordStore;
pub use record::{AnnotationPayload, AnnotationSet, NoteEntry, StoredRecord, StrokeEntry};
pub use traits::RecordStore;
