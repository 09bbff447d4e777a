//! Annotation sessions for multi-image photo viewers.
//!
//! Keeps freehand strokes and movable text notes per image, with per-image
//! undo/redo of stroke edits, and persists the result per photo through a
//! pluggable record store.

pub mod config;
pub mod constants;
pub mod drawing;
pub mod interaction;
pub mod model;
pub mod persistence;
pub mod session;
pub mod store;
pub mod undo;

pub use config::{ConfigError, LogLevel, SessionConfig};
pub use interaction::DragOutcome;
pub use model::{NoteStatus, Point, Rect, Stroke, StrokeId, TextNote};
pub use persistence::{
    FileRecordStore, MemoryRecordStore, PersistenceBridge, PersistenceError, PhotoId, RecordStore,
};
pub use session::{AnnotationSession, FrameView, ImageDescriptor, NoteView, PageView};

#[cfg(test)]
mod tests;
