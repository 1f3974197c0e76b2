use std::io;
use std::sync::{Arc, Mutex};

use pupil::{Field, RuleBatch, Validator};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines in memory
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
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

fn logs_at<T>(level: Level, run: impl FnOnce() -> T) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.text()
}

fn sample_batch() -> RuleBatch {
    let mut batch = RuleBatch::new();
    batch.insert("name", Field::new("Ada", "required"));
    batch.insert("age", Field::new(7, "min:18"));
    batch
}

// ============================================================================
// Batch summary
// ============================================================================

#[test]
fn test_batch_summary_logged_at_info() {
    let validator = Validator::new();
    let log = logs_at(Level::INFO, || validator.validate(&sample_batch()).unwrap());

    assert!(log.contains("validated batch"), "{}", log);
    assert!(log.contains("fields=2"), "{}", log);
    assert!(log.contains("passed=1"), "{}", log);
    assert!(!log.contains("validated field"), "{}", log);
}

// ============================================================================
// Per-check detail
// ============================================================================

#[test]
fn test_check_invocations_logged_at_trace() {
    let validator = Validator::new();
    let log = logs_at(Level::TRACE, || validator.validate(&sample_batch()).unwrap());

    assert!(log.contains("validated field"), "{}", log);
    assert!(log.contains("invoked check"), "{}", log);
    assert!(log.contains("value=\"string\""), "{}", log);
    assert!(log.contains("value=\"integer\""), "{}", log);
}
