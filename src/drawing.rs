//! In-progress stroke state.
//!
//! At most one stroke is being drawn at a time, and only on the image that
//! is currently displayed.

use crate::model::{Point, Stroke, StrokeId};

/// Pen settings applied to new strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: String,
    pub width: f32,
}

/// A stroke being drawn on a given image.
#[derive(Debug, Clone)]
struct ActiveStroke {
    image: usize,
    stroke: Stroke,
}

/// Idle / Drawing state machine for freehand strokes.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    active: Option<ActiveStroke>,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke on `image`. Any stroke still in progress is dropped.
    pub fn start(&mut self, image: usize, id: StrokeId, pen: &Pen, point: Point) {
        if let Some(previous) = self.active.take() {
            log::debug!("Dropping unfinished {}", previous.stroke.id);
        }
        self.active = Some(ActiveStroke {
            image,
            stroke: Stroke::new(id, pen.color.clone(), pen.width, point),
        });
    }

    /// Add a point to the current stroke. Ignored while idle.
    pub fn add_point(&mut self, point: Point) {
        if let Some(active) = self.active.as_mut() {
            active.stroke.push(point);
            log::trace!("{} now has {} points", active.stroke.id, active.stroke.len());
        }
    }

    /// Finish the current stroke, returning it with the image it belongs to.
    pub fn finish(&mut self) -> Option<(usize, Stroke)> {
        self.active.take().map(|a| (a.image, a.stroke))
    }

    /// Discard the current stroke.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// The stroke being drawn on `image`, for rendering.
    pub fn preview(&self, image: usize) -> Option<&Stroke> {
        self.active
            .as_ref()
            .filter(|a| a.image == image)
            .map(|a| &a.stroke)
    }
}
