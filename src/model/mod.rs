//! Data models for annotation sessions.

mod geometry;
mod note;
mod stroke;

pub use geometry::{Point, Rect};
pub use note::{NoteStatus, TextNote};
pub use stroke::{Stroke, StrokeId, StrokeIdAllocator};
