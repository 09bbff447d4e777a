//! Movable text notes.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Lifecycle status of a text note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    /// Just created, text still being edited.
    #[default]
    Pending,
    /// Text confirmed by the user.
    Saved,
}

/// A draggable, editable text annotation. Position is center-anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNote {
    pub id: String,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub status: NoteStatus,
}

impl TextNote {
    /// Create an empty pending note at `position`.
    pub fn pending(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            x: position.x,
            y: position.y,
            status: NoteStatus::Pending,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Store the edited text and mark the note as saved.
    pub fn confirm(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.status = NoteStatus::Saved;
    }
}
