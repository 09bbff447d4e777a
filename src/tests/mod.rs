//! Session-level tests.
//!
//! These drive a whole [`AnnotationSession`](crate::AnnotationSession) the
//! way a viewer would and check history, isolation, drag and persistence
//! behaviour end to end.

mod persistence_tests;

use crate::{AnnotationSession, ImageDescriptor, PhotoId, Point, SessionConfig, StrokeId};

/// Open a session with `count` images, all with photo ids starting at 1.
fn open_session(count: usize) -> AnnotationSession {
    let images = (0..count)
        .map(|i| ImageDescriptor::new(format!("photo-{}.jpg", i), Some(i as PhotoId + 1)))
        .collect();
    AnnotationSession::open(images, SessionConfig::default())
}

/// Draw a straight two-point stroke on the current image.
fn draw(session: &mut AnnotationSession, x: f32, y: f32) -> StrokeId {
    session.begin_stroke(Point::new(x, y));
    session.extend_stroke(Point::new(x + 20.0, y + 5.0));
    session.end_stroke().expect("stroke committed")
}

/// Stroke ids of an image, in stacking order.
fn stroke_ids(session: &AnnotationSession, index: usize) -> Vec<StrokeId> {
    session.strokes(index).iter().map(|s| s.id).collect()
}
