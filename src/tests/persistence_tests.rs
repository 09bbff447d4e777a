//! Loading and saving whole sessions.

use super::{draw, open_session};
use crate::persistence::{AnnotationPayload, NoteEntry, StrokeEntry};
use crate::{
    AnnotationSession, FileRecordStore, ImageDescriptor, MemoryRecordStore, NoteStatus,
    PersistenceBridge, PersistenceError, Point, SessionConfig, Stroke, StrokeId,
};

fn seeded_payload() -> String {
    AnnotationPayload {
        strokes: vec![StrokeEntry {
            color: "#0000ff".to_string(),
            width: 3.0,
            points: vec![Point::new(1.0, 1.0), Point::new(9.0, 9.0)],
        }],
        text_notes: vec![NoteEntry {
            id: "note-1".to_string(),
            text: "graft site".to_string(),
            x: 40.0,
            y: 60.0,
            status: NoteStatus::Saved,
        }],
    }
    .to_json()
    .expect("serialize")
}

#[test]
fn test_session_save_then_reload() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());

    let mut session = open_session(2);
    draw(&mut session, 0.0, 0.0);
    draw(&mut session, 0.0, 40.0);
    let note = session.create_note().expect("note created");
    session.confirm_edit(&note, "stitches intact");
    pollster::block_on(session.save_current(&bridge)).expect("save");
    assert!(!session.has_unsaved_changes(0));

    let mut reopened = open_session(2);
    let loaded = pollster::block_on(reopened.load_from_persistence(&bridge));
    assert_eq!(loaded, 1);

    assert_eq!(reopened.strokes(0).len(), 2);
    for (saved, restored) in session.strokes(0).iter().zip(reopened.strokes(0)) {
        assert_eq!(saved.color, restored.color);
        assert_eq!(saved.width, restored.width);
        assert_eq!(saved.points(), restored.points());
    }
    assert_eq!(reopened.notes(0), session.notes(0));
    assert!(reopened.strokes(1).is_empty());
    // History is not persisted
    assert!(!reopened.can_undo());
}

#[test]
fn test_load_skips_bad_records() {
    let store = MemoryRecordStore::new();
    store.insert_raw(1, seeded_payload());
    store.insert_raw(2, "{\"strokes\": [garbage");
    store.fail_reads_for(3);
    store.insert_raw(4, seeded_payload());
    let bridge = PersistenceBridge::new(store);

    let images = vec![
        ImageDescriptor::new("a.jpg", Some(1)),
        ImageDescriptor::new("b.jpg", Some(2)),
        ImageDescriptor::new("c.jpg", Some(3)),
        ImageDescriptor::new("d.jpg", None),
        ImageDescriptor::new("e.jpg", Some(4)),
    ];
    let mut session = AnnotationSession::open(images, SessionConfig::default());
    let loaded = pollster::block_on(session.load_from_persistence(&bridge));

    assert_eq!(loaded, 2);
    assert_eq!(session.strokes(0).len(), 1);
    assert_eq!(session.notes(0)[0].text, "graft site");
    assert!(session.strokes(1).is_empty());
    assert!(session.strokes(2).is_empty());
    assert!(session.notes(3).is_empty());
    assert_eq!(session.strokes(4).len(), 1);
    // Each loaded stroke gets its own session id
    assert_ne!(session.strokes(0)[0].id, session.strokes(4)[0].id);
}

#[test]
fn test_loaded_strokes_are_editable() {
    let store = MemoryRecordStore::new();
    store.insert_raw(1, seeded_payload());
    let bridge = PersistenceBridge::new(store);

    let mut session = open_session(1);
    pollster::block_on(session.load_from_persistence(&bridge));

    let loaded = session.strokes(0)[0].id;
    let drawn = draw(&mut session, 50.0, 50.0);
    assert_ne!(loaded, drawn);

    assert!(session.delete_stroke(loaded));
    assert!(session.undo());
    assert_eq!(session.strokes(0)[0].id, loaded);

    // New notes never reuse a loaded id
    assert_ne!(session.create_note().as_deref(), Some("note-1"));
}

#[test]
fn test_save_without_photo_id() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());
    let images = vec![ImageDescriptor::new("camera.jpg", None)];
    let mut session = AnnotationSession::open(images, SessionConfig::default());
    draw(&mut session, 0.0, 0.0);

    let result = pollster::block_on(session.save_current(&bridge));
    assert!(matches!(
        result,
        Err(PersistenceError::MissingPhotoId { index: 0 })
    ));
    assert!(bridge.store().is_empty());
    assert!(session.has_unsaved_changes(0));
}

#[test]
fn test_failed_save_can_be_retried() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());
    let mut session = open_session(1);
    draw(&mut session, 0.0, 0.0);
    let before = session.strokes(0).to_vec();

    bridge.store().set_fail_writes(true);
    assert!(pollster::block_on(session.save_current(&bridge)).is_err());
    assert_eq!(session.strokes(0), before.as_slice());
    assert!(session.has_unsaved_changes(0));
    assert!(session.can_undo());

    bridge.store().set_fail_writes(false);
    pollster::block_on(session.save_current(&bridge)).expect("retry succeeds");
    assert!(!session.has_unsaved_changes(0));
    assert_eq!(bridge.store().len(), 1);
}

#[test]
fn test_save_overwrites_previous_record() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());
    let mut session = open_session(1);
    draw(&mut session, 0.0, 0.0);
    pollster::block_on(session.save_current(&bridge)).expect("first save");

    session.undo();
    pollster::block_on(session.save_current(&bridge)).expect("second save");

    let mut reopened = open_session(1);
    pollster::block_on(reopened.load_from_persistence(&bridge));
    assert!(reopened.strokes(0).is_empty());
    assert_eq!(bridge.store().len(), 1);
}

#[test]
fn test_file_store_session_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bridge = PersistenceBridge::new(FileRecordStore::new(dir.path()));

    let mut session = open_session(3);
    session.set_current_index(2);
    draw(&mut session, 10.0, 10.0);
    pollster::block_on(session.save_current(&bridge)).expect("save");
    assert!(dir.path().join("3.json").exists());

    let mut reopened = open_session(3);
    assert_eq!(pollster::block_on(reopened.load_from_persistence(&bridge)), 1);
    assert_eq!(reopened.strokes(2).len(), 1);
    assert!(reopened.strokes(0).is_empty());
}

#[test]
fn test_non_finite_gestures_survive_save() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());
    let mut session = open_session(1);
    draw(&mut session, 0.0, 0.0);
    session.begin_stroke(Point::new(1.0, 1.0));
    session.extend_stroke(Point::new(f32::NAN, 2.0));
    session.extend_stroke(Point::new(4.0, 4.0));
    session.end_stroke();
    let note = session.create_note().expect("note created");
    session.confirm_edit(&note, "rash");

    pollster::block_on(session.save_current(&bridge)).expect("save");

    let mut reopened = open_session(1);
    assert_eq!(pollster::block_on(reopened.load_from_persistence(&bridge)), 1);
    assert_eq!(reopened.strokes(0).len(), 2);
    assert_eq!(reopened.notes(0).len(), 1);
}

#[test]
fn test_save_never_writes_unloadable_record() {
    let bridge = PersistenceBridge::new(MemoryRecordStore::new());
    let mut session = open_session(1);
    let points = vec![Point::new(0.0, 0.0), Point::new(f32::INFINITY, 1.0)];
    session.set_strokes(0, vec![Stroke::from_points(StrokeId(99), "red", 2.0, points)]);

    let result = pollster::block_on(session.save_current(&bridge));
    assert!(matches!(
        result,
        Err(PersistenceError::InvalidPayload { .. })
    ));
    assert!(bridge.store().is_empty());
    assert!(session.has_unsaved_changes(0));
}

#[test]
fn test_load_keeps_note_ids_unique() {
    let store = MemoryRecordStore::new();
    store.insert_raw(1, seeded_payload());
    store.insert_raw(2, seeded_payload());
    let bridge = PersistenceBridge::new(store);

    let mut session = open_session(2);
    assert_eq!(pollster::block_on(session.load_from_persistence(&bridge)), 2);

    let first = &session.notes(0)[0];
    let second = &session.notes(1)[0];
    assert_eq!(first.id, "note-1");
    assert_ne!(first.id, second.id);
    assert_eq!(second.text, "graft site");
    let renamed = second.id.clone();

    session.set_current_index(1);
    assert!(session.confirm_edit(&renamed, "graft site, day 3"));
    assert_eq!(session.notes(0)[0].text, "graft site");
}
