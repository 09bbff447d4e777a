//! Per-image annotation storage for one viewing session.
//!
//! Slices are addressed by the image's position in the viewer (0-based),
//! not by its persisted photo id. Reads of an index that was never written
//! return empty slices; nothing here can fail.

use std::collections::HashMap;

use crate::model::{Stroke, StrokeId, TextNote};

/// Committed strokes and notes of a single image.
#[derive(Debug, Clone, Default)]
pub struct ImageAnnotations {
    /// Strokes in drawing order; later strokes render on top.
    pub strokes: Vec<Stroke>,
    /// Notes in creation order.
    pub notes: Vec<TextNote>,
}

impl ImageAnnotations {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.notes.is_empty()
    }
}

/// In-memory annotation state for every image in the open viewer.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    slices: HashMap<usize, ImageAnnotations>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed strokes for an image, empty if none were recorded.
    pub fn strokes(&self, index: usize) -> &[Stroke] {
        self.slices
            .get(&index)
            .map(|s| s.strokes.as_slice())
            .unwrap_or(&[])
    }

    /// Notes for an image, empty if none were recorded.
    pub fn notes(&self, index: usize) -> &[TextNote] {
        self.slices
            .get(&index)
            .map(|s| s.notes.as_slice())
            .unwrap_or(&[])
    }

    /// Replace all strokes of an image.
    pub fn set_strokes(&mut self, index: usize, strokes: Vec<Stroke>) {
        self.slice_mut(index).strokes = strokes;
    }

    /// Replace all notes of an image.
    pub fn set_notes(&mut self, index: usize, notes: Vec<TextNote>) {
        self.slice_mut(index).notes = notes;
    }

    /// Indices that currently hold any annotation.
    pub fn image_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slices
            .iter()
            .filter(|(_, slice)| !slice.is_empty())
            .map(|(index, _)| *index)
    }

    fn slice_mut(&mut self, index: usize) -> &mut ImageAnnotations {
        self.slices.entry(index).or_default()
    }

    // ========================================================================
    // Stroke list edits (driven by the undo engine)
    // ========================================================================

    /// Append a stroke on top of the image's stack.
    pub fn push_stroke(&mut self, index: usize, stroke: Stroke) {
        self.slice_mut(index).strokes.push(stroke);
    }

    /// Insert a stroke at `position`, clamped to the current list length.
    pub fn insert_stroke(&mut self, index: usize, position: usize, stroke: Stroke) {
        let strokes = &mut self.slice_mut(index).strokes;
        let position = position.min(strokes.len());
        strokes.insert(position, stroke);
    }

    /// Position of a stroke in the image's list.
    pub fn position_of_stroke(&self, index: usize, id: StrokeId) -> Option<usize> {
        self.strokes(index).iter().position(|s| s.id == id)
    }

    /// Remove a stroke by id, returning its former position and the stroke.
    pub fn remove_stroke(&mut self, index: usize, id: StrokeId) -> Option<(usize, Stroke)> {
        let position = self.position_of_stroke(index, id)?;
        let stroke = self.slices.get_mut(&index)?.strokes.remove(position);
        Some((position, stroke))
    }

    // ========================================================================
    // Note edits
    // ========================================================================

    pub fn push_note(&mut self, index: usize, note: TextNote) {
        self.slice_mut(index).notes.push(note);
    }

    pub fn note(&self, index: usize, id: &str) -> Option<&TextNote> {
        self.notes(index).iter().find(|n| n.id == id)
    }

    pub fn note_mut(&mut self, index: usize, id: &str) -> Option<&mut TextNote> {
        self.slices
            .get_mut(&index)?
            .notes
            .iter_mut()
            .find(|n| n.id == id)
    }

    pub fn remove_note(&mut self, index: usize, id: &str) -> Option<TextNote> {
        let notes = &mut self.slices.get_mut(&index)?.notes;
        let position = notes.iter().position(|n| n.id == id)?;
        Some(notes.remove(position))
    }

    /// Check whether any image in the session already uses a note id.
    pub fn contains_note_id(&self, id: &str) -> bool {
        self.slices
            .values()
            .any(|slice| slice.notes.iter().any(|n| n.id == id))
    }
}
