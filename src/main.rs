/// Scripted annotation session against a file-backed record store.
///
/// Usage: `annotation-demo [CONFIG_JSON] [STORE_DIR]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = run() {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::PathBuf;

    use annotation_session::constants::APP_DIR;
    use annotation_session::{
        AnnotationSession, FileRecordStore, ImageDescriptor, PersistenceBridge, Point, Rect,
        SessionConfig,
    };

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => SessionConfig::load(std::path::Path::new(&path))?,
        None => SessionConfig::load_from_default_path().unwrap_or_default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::info!("Log level: {}", config.log_level.name());

    let store_dir = args.next().map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join("records"))
            .unwrap_or_else(|| PathBuf::from("annotation-records"))
    });
    log::info!("Using record store at {:?}", store_dir);

    let bridge = PersistenceBridge::new(FileRecordStore::new(store_dir));
    let images = vec![
        ImageDescriptor::new("file:///photos/visit-1/front.jpg", Some(1)),
        ImageDescriptor::new("file:///photos/visit-1/side.jpg", Some(2)),
        ImageDescriptor::new("file:///camera/unsaved.jpg", None),
    ];

    let mut session = AnnotationSession::open(images, config);
    let loaded = pollster::block_on(session.load_from_persistence(&bridge));
    println!("Loaded annotations for {} images", loaded);

    // Draw two strokes, erase the first, then take the erase back
    session.begin_stroke(Point::new(40.0, 40.0));
    session.extend_stroke(Point::new(120.0, 80.0));
    session.extend_stroke(Point::new(180.0, 60.0));
    session.end_stroke();

    session.begin_stroke(Point::new(60.0, 300.0));
    session.extend_stroke(Point::new(220.0, 300.0));
    session.end_stroke();

    session.erase_at(Point::new(120.0, 80.0));
    session.undo();

    // Annotate with a note and drag it into place
    let note = session.create_note().ok_or("session has no images")?;
    session.confirm_edit(&note, "Healing well, no redness");
    session.begin_drag(&note);
    session.update_drag(&note, -60.0, -200.0);
    let viewport = session.viewport();
    let trash = Rect::new(
        viewport.x + viewport.width / 2.0 - 30.0,
        viewport.y + viewport.height - 80.0,
        60.0,
        60.0,
    );
    let outcome = session.end_drag(&note, Point::new(135.0, 222.0), &trash);
    println!("Note drag: {:?}", outcome);

    match pollster::block_on(session.save_current(&bridge)) {
        Ok(()) => println!(
            "Saved image 0: {} strokes, {} notes",
            session.strokes(0).len(),
            session.notes(0).len()
        ),
        Err(e) => eprintln!("Save failed, try again: {}", e),
    }

    // The last image was never persisted, so it cannot be saved
    session.set_current_index(2);
    if let Err(e) = pollster::block_on(session.save_current(&bridge)) {
        println!("Image 2 not saved: {}", e);
    }

    Ok(())
}

// WASM builds use the library directly
#[cfg(target_arch = "wasm32")]
fn main() {}
