//! Serialized form of an image's annotations.
//!
//! The payload is stored as a JSON string of the shape
//! `{ "strokes": [...], "textNotes": [...] }`. Everything read back is
//! validated here before it reaches the session.

use serde::{Deserialize, Serialize};

use crate::model::{NoteStatus, Point, Stroke, StrokeIdAllocator, TextNote};

use super::{PersistenceError, PhotoId};

/// A record as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    /// Stable photo identifier the record is keyed by.
    pub photo_id: PhotoId,
    /// Serialized [`AnnotationPayload`].
    pub payload: String,
    /// Last write, in milliseconds since the Unix epoch.
    pub updated_at: u64,
}

/// A stroke as persisted. Session ids are not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeEntry {
    pub color: String,
    pub width: f32,
    pub points: Vec<Point>,
}

impl From<&Stroke> for StrokeEntry {
    fn from(stroke: &Stroke) -> Self {
        Self {
            color: stroke.color.clone(),
            width: stroke.width,
            points: stroke.points().to_vec(),
        }
    }
}

/// A text note as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub status: NoteStatus,
}

impl From<&TextNote> for NoteEntry {
    fn from(note: &TextNote) -> Self {
        Self {
            id: note.id.clone(),
            text: note.text.clone(),
            x: note.x,
            y: note.y,
            status: note.status,
        }
    }
}

impl From<NoteEntry> for TextNote {
    fn from(entry: NoteEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            x: entry.x,
            y: entry.y,
            status: entry.status,
        }
    }
}

/// Strokes and notes of one image, ready for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    pub strokes: Vec<Stroke>,
    pub notes: Vec<TextNote>,
}

/// The serialized payload of one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationPayload {
    #[serde(default)]
    pub strokes: Vec<StrokeEntry>,
    #[serde(default)]
    pub text_notes: Vec<NoteEntry>,
}

impl AnnotationPayload {
    /// Build a payload from committed session state.
    pub fn from_annotations(strokes: &[Stroke], notes: &[TextNote]) -> Self {
        Self {
            strokes: strokes.iter().map(StrokeEntry::from).collect(),
            text_notes: notes.iter().map(NoteEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a stored payload.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let payload: Self = serde_json::from_str(json)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Reject values the session cannot render or edit.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        for (i, stroke) in self.strokes.iter().enumerate() {
            if !stroke.width.is_finite() || stroke.width <= 0.0 {
                return Err(PersistenceError::invalid_payload(format!(
                    "stroke {} has width {}",
                    i, stroke.width
                )));
            }
            if stroke.points.is_empty() {
                return Err(PersistenceError::invalid_payload(format!(
                    "stroke {} has no points",
                    i
                )));
            }
            if !stroke.points.iter().all(Point::is_finite) {
                return Err(PersistenceError::invalid_payload(format!(
                    "stroke {} has a non-finite point",
                    i
                )));
            }
        }

        for note in &self.text_notes {
            if note.id.is_empty() {
                return Err(PersistenceError::invalid_payload("note without id"));
            }
            if !note.x.is_finite() || !note.y.is_finite() {
                return Err(PersistenceError::invalid_payload(format!(
                    "note {} has a non-finite position",
                    note.id
                )));
            }
        }

        Ok(())
    }

    /// Convert into session state, giving each stroke a fresh session id.
    pub fn into_annotations(self, ids: &mut StrokeIdAllocator) -> AnnotationSet {
        AnnotationSet {
            strokes: self
                .strokes
                .into_iter()
                .map(|entry| {
                    Stroke::from_points(ids.next_id(), entry.color, entry.width, entry.points)
                })
                .collect(),
            notes: self.text_notes.into_iter().map(TextNote::from).collect(),
        }
    }
}
