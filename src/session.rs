//! Annotation session of one open viewer.
//!
//! The viewer's controller constructs a session when it opens, drives it
//! from gesture callbacks, and drops it on close. Only the image that is
//! currently displayed can be edited. All edits are synchronous; only
//! loading and saving await the record store.

use std::collections::HashSet;

use crate::config::SessionConfig;
use crate::constants::NOTE_ID_PREFIX;
use crate::drawing::{DrawingState, Pen};
use crate::interaction::{DragController, DragOutcome, DropDecision};
use crate::model::{NoteStatus, Point, Rect, Stroke, StrokeId, StrokeIdAllocator, TextNote};
use crate::persistence::{PersistenceBridge, PersistenceError, PhotoId, RecordStore};
use crate::store::AnnotationStore;
use crate::undo::{self, UndoHistory};

/// An image handed to the session by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Where the host loads the picture from.
    pub uri: String,
    /// Persisted photo id; images without one cannot be saved.
    pub id: Option<PhotoId>,
}

impl ImageDescriptor {
    pub fn new(uri: impl Into<String>, id: Option<PhotoId>) -> Self {
        Self {
            uri: uri.into(),
            id,
        }
    }
}

/// A note as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteView {
    pub id: String,
    pub text: String,
    /// Stored position plus any active drag offset.
    pub position: Point,
    pub status: NoteStatus,
    pub is_dragging: bool,
}

/// Everything the host renders for one page.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub index: usize,
    pub uri: &'a str,
    pub strokes: &'a [Stroke],
    /// The stroke being drawn, only ever on the visible page.
    pub active_stroke: Option<&'a Stroke>,
    pub notes: Vec<NoteView>,
}

/// Per-frame output for the host: pages to render plus toolbar state.
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub current_index: usize,
    pub pages: Vec<PageView<'a>>,
    /// Host suppresses pinch, pan and page swipes while true.
    pub is_dragging: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_description: Option<&'static str>,
    pub redo_description: Option<&'static str>,
}

/// Strokes, notes and history for every image of an open viewer.
#[derive(Debug)]
pub struct AnnotationSession {
    images: Vec<ImageDescriptor>,
    current: usize,
    store: AnnotationStore,
    history: UndoHistory,
    drawing: DrawingState,
    drag: DragController,
    stroke_ids: StrokeIdAllocator,
    note_counter: u64,
    pen: Pen,
    viewport: Rect,
    config: SessionConfig,
    unsaved: HashSet<usize>,
}

impl AnnotationSession {
    /// Open an empty session over the viewer's images.
    pub fn open(images: Vec<ImageDescriptor>, config: SessionConfig) -> Self {
        log::debug!("Opening annotation session over {} images", images.len());
        Self {
            images,
            current: 0,
            store: AnnotationStore::new(),
            history: UndoHistory::new(),
            drawing: DrawingState::new(),
            drag: DragController::new(),
            stroke_ids: StrokeIdAllocator::new(),
            note_counter: 0,
            pen: Pen {
                color: config.default_pen_color.clone(),
                width: config.default_pen_width,
            },
            viewport: config.viewport,
            config,
            unsaved: HashSet::new(),
        }
    }

    /// Populate the store from persisted records, once, when the viewer opens.
    ///
    /// Images without a photo id stay empty. A record that cannot be read or
    /// parsed leaves its image empty without affecting the others. Returns
    /// the number of images that had a record.
    pub async fn load_from_persistence<S: RecordStore>(
        &mut self,
        bridge: &PersistenceBridge<S>,
    ) -> usize {
        let targets: Vec<(usize, PhotoId)> = self
            .images
            .iter()
            .enumerate()
            .filter_map(|(index, image)| image.id.map(|id| (index, id)))
            .collect();

        let mut loaded = 0;
        for (index, photo_id) in targets {
            let Some(set) = bridge.load(photo_id, &mut self.stroke_ids).await else {
                continue;
            };

            self.store.set_strokes(index, set.strokes);
            self.store.set_notes(index, Vec::new());
            for mut note in set.notes {
                // Note ids must stay unique across every image of the session
                if self.store.contains_note_id(&note.id) {
                    let fresh = self.next_note_id();
                    log::debug!("Renaming loaded {} on image {} to {}", note.id, index, fresh);
                    note.id = fresh;
                }
                self.store.push_note(index, note);
            }
            self.unsaved.remove(&index);
            loaded += 1;
        }

        log::info!(
            "Loaded annotations for {} of {} images",
            loaded,
            self.images.len()
        );
        loaded
    }

    // ========================================================================
    // Images and paging
    // ========================================================================

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Switch the displayed page. Unfinished strokes and drags are abandoned.
    pub fn set_current_index(&mut self, index: usize) {
        let index = index.min(self.images.len().saturating_sub(1));
        if index == self.current {
            return;
        }

        self.drawing.cancel();
        self.drag.cancel();
        self.current = index;
        log::debug!("Viewer moved to image {}", index);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Set the visible area notes are centered in. Non-finite rects are ignored.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport.center().is_finite() {
            self.viewport = viewport;
        } else {
            log::debug!("Ignoring viewport {:?}", viewport);
        }
    }

    // ========================================================================
    // Store access
    // ========================================================================

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn strokes(&self, index: usize) -> &[Stroke] {
        self.store.strokes(index)
    }

    pub fn notes(&self, index: usize) -> &[TextNote] {
        self.store.notes(index)
    }

    /// Replace an image's strokes outright. History is left as is.
    pub fn set_strokes(&mut self, index: usize, strokes: Vec<Stroke>) {
        self.store.set_strokes(index, strokes);
        self.unsaved.insert(index);
    }

    /// Replace an image's notes outright.
    pub fn set_notes(&mut self, index: usize, notes: Vec<TextNote>) {
        self.store.set_notes(index, notes);
        self.unsaved.insert(index);
    }

    /// Whether an image changed since it was last loaded or saved.
    pub fn has_unsaved_changes(&self, index: usize) -> bool {
        self.unsaved.contains(&index)
    }

    // ========================================================================
    // Pen
    // ========================================================================

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn set_pen_color(&mut self, color: impl Into<String>) {
        self.pen.color = color.into();
    }

    /// Set the width of new strokes. Non-positive or non-finite widths are ignored.
    pub fn set_pen_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.pen.width = width;
        } else {
            log::debug!("Ignoring pen width {}", width);
        }
    }

    // ========================================================================
    // Strokes
    // ========================================================================

    /// Start a stroke on the current image.
    ///
    /// Starting counts as a new forward action: the image's redo history is
    /// dropped even if the stroke is never finished. Ignored when the
    /// session has no images or `point` is not finite.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.images.is_empty() || !point.is_finite() {
            log::debug!("Ignoring stroke start at {:?}", point);
            return;
        }

        self.history.clear_redo(self.current);
        let id = self.stroke_ids.next_id();
        self.drawing.start(self.current, id, &self.pen, point);
    }

    /// Append a point to the stroke in progress. Non-finite points are dropped.
    pub fn extend_stroke(&mut self, point: Point) {
        if point.is_finite() {
            self.drawing.add_point(point);
        }
    }

    /// Commit the stroke in progress. Does nothing while idle.
    pub fn end_stroke(&mut self) -> Option<StrokeId> {
        let (index, stroke) = self.drawing.finish()?;
        let id = stroke.id;
        undo::commit_stroke(&mut self.history, &mut self.store, index, stroke);
        self.unsaved.insert(index);
        Some(id)
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_drawing()
    }

    /// Erase a committed stroke of the current image.
    /// Returns false if it is not there or a stroke is being drawn.
    pub fn delete_stroke(&mut self, id: StrokeId) -> bool {
        if self.drawing.is_drawing() {
            log::debug!("Ignoring erase of {} while drawing", id);
            return false;
        }

        let deleted = undo::delete_stroke(&mut self.history, &mut self.store, self.current, id);
        if deleted {
            self.unsaved.insert(self.current);
        }
        deleted
    }

    /// Eraser tap: delete the topmost stroke under `point`.
    pub fn erase_at(&mut self, point: Point) -> Option<StrokeId> {
        let tolerance = self.config.eraser_tolerance;
        let id = self
            .store
            .strokes(self.current)
            .iter()
            .rev()
            .find(|s| s.hit_test(&point, tolerance))
            .map(|s| s.id)?;

        self.delete_stroke(id).then_some(id)
    }

    pub fn undo(&mut self) -> bool {
        let undone = undo::undo_action(&mut self.history, &mut self.store, self.current);
        if undone {
            self.unsaved.insert(self.current);
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = undo::redo_action(&mut self.history, &mut self.store, self.current);
        if redone {
            self.unsaved.insert(self.current);
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo(self.current)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo(self.current)
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    // ========================================================================
    // Notes
    // ========================================================================

    fn next_note_id(&mut self) -> String {
        loop {
            self.note_counter += 1;
            let id = format!("{}{}", NOTE_ID_PREFIX, self.note_counter);
            if !self.store.contains_note_id(&id) {
                return id;
            }
        }
    }

    /// Add an empty pending note at the viewport center of the current image.
    /// Returns `None` when the session has no images.
    pub fn create_note(&mut self) -> Option<String> {
        if self.images.is_empty() {
            return None;
        }

        let id = self.next_note_id();
        let note = TextNote::pending(id.clone(), self.viewport.center());
        self.store.push_note(self.current, note);
        self.unsaved.insert(self.current);
        log::debug!("Created {} on image {}", id, self.current);
        Some(id)
    }

    /// Store edited text and mark the note saved. False if the note is unknown.
    pub fn confirm_edit(&mut self, note_id: &str, text: impl Into<String>) -> bool {
        let Some(note) = self.store.note_mut(self.current, note_id) else {
            return false;
        };

        note.confirm(text);
        self.unsaved.insert(self.current);
        log::debug!("Confirmed {}", note_id);
        true
    }

    /// Start dragging a note of the current image. False if it is unknown.
    pub fn begin_drag(&mut self, note_id: &str) -> bool {
        if self.store.note(self.current, note_id).is_none() {
            return false;
        }
        self.drag.begin(self.current, note_id);
        true
    }

    /// Move the dragged note by a pointer delta. Only the drawn position
    /// changes until the drag ends. Non-finite deltas are dropped.
    pub fn update_drag(&mut self, note_id: &str, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            log::debug!("Ignoring drag delta ({}, {})", dx, dy);
            return;
        }
        if self.drag.active().is_some_and(|d| d.note_id == note_id) {
            self.drag.update(dx, dy);
        }
    }

    /// Drop the dragged note.
    ///
    /// Inside `trash_zone` the note is deleted, with no way to undo it.
    /// Anywhere else the dragged position becomes the note's position. The
    /// dragging flag is cleared either way.
    pub fn end_drag(&mut self, note_id: &str, pointer: Point, trash_zone: &Rect) -> DragOutcome {
        let Some(decision) = self.drag.end(pointer, trash_zone) else {
            return DragOutcome::Ignored;
        };

        match decision {
            DropDecision::Delete { image, note_id: id } if id == note_id => {
                if self.store.remove_note(image, &id).is_none() {
                    return DragOutcome::Ignored;
                }
                self.unsaved.insert(image);
                log::debug!("Deleted {} by dropping it in the trash", id);
                DragOutcome::Deleted
            }
            DropDecision::Commit {
                image,
                note_id: id,
                dx,
                dy,
            } if id == note_id => {
                let Some(note) = self.store.note_mut(image, &id) else {
                    return DragOutcome::Ignored;
                };
                let position = note.position().translated(dx, dy);
                note.set_position(position);
                self.unsaved.insert(image);
                DragOutcome::Moved(position)
            }
            _ => DragOutcome::Ignored,
        }
    }

    /// Abandon the current drag without moving or deleting anything.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Persist one image's strokes and notes. On failure nothing in memory
    /// changes and the save can simply be retried.
    pub async fn save<S: RecordStore>(
        &mut self,
        index: usize,
        bridge: &PersistenceBridge<S>,
    ) -> Result<(), PersistenceError> {
        let photo_id = self
            .images
            .get(index)
            .and_then(|image| image.id)
            .ok_or(PersistenceError::MissingPhotoId { index })?;

        bridge
            .save(photo_id, self.store.strokes(index), self.store.notes(index))
            .await?;
        self.unsaved.remove(&index);
        Ok(())
    }

    /// Persist the displayed image.
    pub async fn save_current<S: RecordStore>(
        &mut self,
        bridge: &PersistenceBridge<S>,
    ) -> Result<(), PersistenceError> {
        self.save(self.current, bridge).await
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Build the view of the visible page and its neighbours.
    pub fn frame(&self) -> FrameView<'_> {
        let pages = if self.images.is_empty() {
            Vec::new()
        } else {
            let first = self.current.saturating_sub(self.config.adjacent_pages);
            let last = self
                .current
                .saturating_add(self.config.adjacent_pages)
                .min(self.images.len() - 1);
            (first..=last).map(|index| self.page_view(index)).collect()
        };

        FrameView {
            current_index: self.current,
            pages,
            is_dragging: self.drag.is_dragging(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_description: self.history.undo_description(self.current),
            redo_description: self.history.redo_description(self.current),
        }
    }

    fn page_view(&self, index: usize) -> PageView<'_> {
        let notes = self
            .store
            .notes(index)
            .iter()
            .map(|note| {
                let offset = self.drag.offset_for(index, &note.id);
                let (dx, dy) = offset.unwrap_or((0.0, 0.0));
                NoteView {
                    id: note.id.clone(),
                    text: note.text.clone(),
                    position: note.position().translated(dx, dy),
                    status: note.status,
                    is_dragging: offset.is_some(),
                }
            })
            .collect();

        PageView {
            index,
            uri: &self.images[index].uri,
            strokes: self.store.strokes(index),
            active_stroke: self.drawing.preview(index),
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(count: usize) -> AnnotationSession {
        let images = (0..count)
            .map(|i| {
                let uri = format!("file:///photos/{}.jpg", i);
                ImageDescriptor::new(uri, Some(i as PhotoId + 100))
            })
            .collect();
        AnnotationSession::open(images, SessionConfig::default())
    }

    fn draw(session: &mut AnnotationSession, from: (f32, f32), to: (f32, f32)) -> StrokeId {
        session.begin_stroke(Point::new(from.0, from.1));
        session.extend_stroke(Point::new(to.0, to.1));
        session.end_stroke().expect("stroke committed")
    }

    #[test]
    fn test_end_stroke_while_idle() {
        let mut s = session(1);
        assert!(s.end_stroke().is_none());
        assert!(s.strokes(0).is_empty());
        assert!(!s.can_undo());
    }

    #[test]
    fn test_begin_clears_redo_even_without_end() {
        let mut s = session(1);
        draw(&mut s, (0.0, 0.0), (10.0, 10.0));
        assert!(s.undo());
        assert!(s.can_redo());

        s.begin_stroke(Point::new(5.0, 5.0));
        assert!(!s.can_redo());
        s.set_current_index(0);
        assert!(!s.redo());
    }

    #[test]
    fn test_page_switch_abandons_stroke() {
        let mut s = session(2);
        s.begin_stroke(Point::new(1.0, 1.0));
        s.set_current_index(1);
        assert!(!s.is_drawing());
        assert!(s.end_stroke().is_none());
        assert!(s.strokes(0).is_empty());
        assert!(s.strokes(1).is_empty());
    }

    #[test]
    fn test_set_current_index_clamps() {
        let mut s = session(3);
        s.set_current_index(10);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_erase_hits_topmost() {
        let mut s = session(1);
        let bottom = draw(&mut s, (0.0, 50.0), (100.0, 50.0));
        let top = draw(&mut s, (0.0, 52.0), (100.0, 52.0));

        assert_eq!(s.erase_at(Point::new(50.0, 51.0)), Some(top));
        assert_eq!(s.strokes(0).len(), 1);
        assert_eq!(s.strokes(0)[0].id, bottom);

        assert_eq!(s.erase_at(Point::new(50.0, 300.0)), None);
    }

    #[test]
    fn test_delete_ignored_while_drawing() {
        let mut s = session(1);
        let id = draw(&mut s, (0.0, 0.0), (10.0, 0.0));
        s.begin_stroke(Point::new(20.0, 20.0));
        assert!(!s.delete_stroke(id));
        assert_eq!(s.strokes(0).len(), 1);
    }

    #[test]
    fn test_pen_applies_to_new_strokes() {
        let mut s = session(1);
        s.set_pen_color("#00ff00");
        s.set_pen_width(9.0);
        s.set_pen_width(-1.0);
        s.set_pen_width(f32::NAN);
        draw(&mut s, (0.0, 0.0), (1.0, 1.0));

        let stroke = &s.strokes(0)[0];
        assert_eq!(stroke.color, "#00ff00");
        assert_eq!(stroke.width, 9.0);
    }

    #[test]
    fn test_create_note_at_viewport_center() {
        let mut s = session(1);
        s.set_viewport(Rect::new(0.0, 0.0, 200.0, 300.0));
        let id = s.create_note().expect("note created");

        let note = &s.notes(0)[0];
        assert_eq!(note.id, id);
        assert_eq!(note.position(), Point::new(100.0, 150.0));
        assert_eq!(note.status, NoteStatus::Pending);
        // Notes are outside undo history
        assert!(!s.can_undo());
    }

    #[test]
    fn test_note_ids_skip_loaded_ids() {
        let mut s = session(2);
        s.set_notes(1, vec![TextNote::pending("note-1", Point::default())]);
        let id = s.create_note().expect("note created");
        assert_eq!(id, "note-2");
    }

    #[test]
    fn test_confirm_edit() {
        let mut s = session(1);
        let id = s.create_note().expect("note created");
        assert!(s.confirm_edit(&id, "laceration"));
        assert!(!s.confirm_edit("note-missing", "x"));

        let note = &s.notes(0)[0];
        assert_eq!(note.status, NoteStatus::Saved);
        assert_eq!(note.text, "laceration");
    }

    #[test]
    fn test_drag_is_visual_until_end() {
        let mut s = session(1);
        s.set_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));
        let id = s.create_note().expect("note created");

        assert!(s.begin_drag(&id));
        s.update_drag(&id, 30.0, 10.0);

        assert_eq!(s.notes(0)[0].position(), Point::new(100.0, 100.0));
        let frame = s.frame();
        assert!(frame.is_dragging);
        assert_eq!(frame.pages[0].notes[0].position, Point::new(130.0, 110.0));
        assert!(frame.pages[0].notes[0].is_dragging);
    }

    #[test]
    fn test_end_drag_for_other_note_clears_flag() {
        let mut s = session(1);
        let id = s.create_note().expect("note created");
        s.begin_drag(&id);
        let trash = Rect::new(0.0, 0.0, 50.0, 50.0);
        let outcome = s.end_drag("note-other", Point::new(300.0, 300.0), &trash);
        assert_eq!(outcome, DragOutcome::Ignored);
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_begin_drag_unknown_note() {
        let mut s = session(1);
        assert!(!s.begin_drag("note-9"));
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_frame_covers_adjacent_pages() {
        let mut s = session(5);
        s.set_current_index(0);
        let pages: Vec<usize> = s.frame().pages.iter().map(|p| p.index).collect();
        assert_eq!(pages, vec![0, 1]);

        s.set_current_index(2);
        s.begin_stroke(Point::new(1.0, 1.0));
        let frame = s.frame();
        let pages: Vec<usize> = frame.pages.iter().map(|p| p.index).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert!(frame.pages[1].active_stroke.is_some());
        assert!(frame.pages[0].active_stroke.is_none());
        assert_eq!(frame.pages[1].uri, "file:///photos/2.jpg");
    }

    #[test]
    fn test_frame_toolbar_flags() {
        let mut s = session(1);
        let frame = s.frame();
        assert!(!frame.can_undo && !frame.can_redo);

        draw(&mut s, (0.0, 0.0), (5.0, 5.0));
        s.undo();
        let frame = s.frame();
        assert!(!frame.can_undo);
        assert!(frame.can_redo);
        assert_eq!(frame.redo_description, Some("Draw stroke"));
    }

    #[test]
    fn test_empty_session() {
        let mut s = AnnotationSession::open(Vec::new(), SessionConfig::default());
        s.set_current_index(3);
        assert_eq!(s.current_index(), 0);
        assert!(s.frame().pages.is_empty());
        assert!(!s.undo());
    }

    #[test]
    fn test_empty_session_ignores_edits() {
        let mut s = AnnotationSession::open(Vec::new(), SessionConfig::default());
        s.begin_stroke(Point::new(1.0, 1.0));
        s.extend_stroke(Point::new(2.0, 2.0));
        assert!(!s.is_drawing());
        assert!(s.end_stroke().is_none());
        assert!(s.create_note().is_none());

        assert!(s.strokes(0).is_empty());
        assert!(s.notes(0).is_empty());
        assert!(!s.has_unsaved_changes(0));
    }

    #[test]
    fn test_frame_with_huge_adjacent_pages() {
        let config = SessionConfig {
            adjacent_pages: usize::MAX,
            ..SessionConfig::default()
        };
        let images = (0..3)
            .map(|i| ImageDescriptor::new(format!("{}.jpg", i), None))
            .collect();
        let mut s = AnnotationSession::open(images, config);
        s.set_current_index(1);

        let pages: Vec<usize> = s.frame().pages.iter().map(|p| p.index).collect();
        assert_eq!(pages, vec![0, 1, 2]);
    }

    #[test]
    fn test_non_finite_gestures_are_dropped() {
        let mut s = session(1);
        s.begin_stroke(Point::new(f32::NAN, 1.0));
        assert!(!s.is_drawing());

        s.begin_stroke(Point::new(1.0, 1.0));
        s.extend_stroke(Point::new(f32::INFINITY, 2.0));
        s.extend_stroke(Point::new(3.0, 3.0));
        s.end_stroke();
        assert_eq!(s.strokes(0)[0].points(), &[Point::new(1.0, 1.0), Point::new(3.0, 3.0)]);

        s.set_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));
        s.set_viewport(Rect::new(0.0, 0.0, f32::NAN, 200.0));
        let id = s.create_note().expect("note created");
        s.begin_drag(&id);
        s.update_drag(&id, f32::NAN, 5.0);
        s.update_drag(&id, 10.0, 5.0);
        let outcome = s.end_drag(&id, Point::new(110.0, 105.0), &Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(outcome, DragOutcome::Moved(Point::new(110.0, 105.0)));
    }

    #[test]
    fn test_unsaved_tracking() {
        let mut s = session(2);
        assert!(!s.has_unsaved_changes(0));
        draw(&mut s, (0.0, 0.0), (5.0, 5.0));
        assert!(s.has_unsaved_changes(0));
        assert!(!s.has_unsaved_changes(1));
    }
}
