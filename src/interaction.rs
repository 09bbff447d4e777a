//! Note drag interaction policy.
//!
//! While a note is dragged the host viewer suppresses its own pinch, pan and
//! page-swipe gestures. Dropping a note inside the trash zone deletes it;
//! dropping it anywhere else commits the dragged position.

use crate::model::{Point, Rect};

/// Result of ending a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The note was dropped on the trash zone and removed.
    Deleted,
    /// The note was moved to this position.
    Moved(Point),
    /// No drag was active, or the note no longer exists.
    Ignored,
}

/// A note currently being dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Image the note lives on.
    pub image: usize,
    /// Id of the dragged note.
    pub note_id: String,
    /// Accumulated horizontal offset since the drag began.
    pub dx: f32,
    /// Accumulated vertical offset since the drag began.
    pub dy: f32,
}

/// What the controller decided when the drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DropDecision {
    Delete { image: usize, note_id: String },
    Commit { image: usize, note_id: String, dx: f32, dy: f32 },
}

/// Tracks the single active note drag of a session.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any note is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn begin(&mut self, image: usize, note_id: impl Into<String>) {
        let note_id = note_id.into();
        log::debug!("Drag started on {} (image {})", note_id, image);
        self.active = Some(ActiveDrag {
            image,
            note_id,
            dx: 0.0,
            dy: 0.0,
        });
    }

    /// Accumulate a pointer delta. Ignored when nothing is dragged.
    pub fn update(&mut self, dx: f32, dy: f32) {
        if let Some(drag) = self.active.as_mut() {
            drag.dx += dx;
            drag.dy += dy;
        }
    }

    /// Offset to draw a note with while it is dragged.
    pub fn offset_for(&self, image: usize, note_id: &str) -> Option<(f32, f32)> {
        self.active
            .as_ref()
            .filter(|d| d.image == image && d.note_id == note_id)
            .map(|d| (d.dx, d.dy))
    }

    /// Finish the drag. The dragging flag is always cleared.
    pub fn end(&mut self, pointer: Point, trash_zone: &Rect) -> Option<DropDecision> {
        let drag = self.active.take()?;
        let decision = if trash_zone.contains(&pointer) {
            DropDecision::Delete {
                image: drag.image,
                note_id: drag.note_id,
            }
        } else {
            DropDecision::Commit {
                image: drag.image,
                note_id: drag.note_id,
                dx: drag.dx,
                dy: drag.dy,
            }
        };
        log::debug!("Drag ended: {:?}", decision);
        Some(decision)
    }

    /// Abandon the drag without committing anything.
    pub fn cancel(&mut self) {
        if let Some(drag) = self.active.take() {
            log::debug!("Drag cancelled on {}", drag.note_id);
        }
    }
}
