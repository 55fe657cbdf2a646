use blueprint_mesh::{build_scene, ExportParams};
use blueprint_shapes::ShapeDescriptor;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_debug<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured.text())
}

#[test]
fn skipped_shapes_log_index_and_raw_type() {
    let shapes = vec![
        ShapeDescriptor::new("wall").with_size(10.0, 1.0),
        ShapeDescriptor::new("Blob"),
        ShapeDescriptor::default(),
    ];
    let (scene, logs) = capture_debug(|| build_scene(&shapes, &ExportParams::default()));
    assert_eq!(scene.unwrap().len(), 1);

    let skipped: Vec<&str> = logs
        .lines()
        .filter(|line| line.contains("skipped shape without geometry"))
        .collect();
    assert_eq!(skipped.len(), 2);
    assert!(skipped[0].contains("index=1"));
    assert!(skipped[0].contains(r#"raw_type=Some("Blob")"#));
    assert!(skipped[1].contains("index=2"));
    assert!(skipped[1].contains("raw_type=None"));
}

#[test]
fn built_solids_are_logged() {
    let shapes = vec![ShapeDescriptor::new("circle").with_radius(2.0)];
    let (_, logs) = capture_debug(|| build_scene(&shapes, &ExportParams::default()));
    assert!(logs.contains("built solid"));
    assert!(logs.contains("kind=circle"));
}
