#[cfg(test)]
#[path = "../../tests/unit/utils/logging_test.rs"]
mod logging_test;

use std::cell::RefCell;
use std::io::Write;
use std::sync::Arc;

/// Specifies a logger used to report progress of long running operations.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which discards all messages.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

/// Creates a logger which writes every message as a separate line into the given writer.
/// Write failures are ignored.
pub fn create_writer_logger<W: Write + 'static>(writer: W) -> InfoLogger {
    let writer = RefCell::new(writer);

    Arc::new(move |msg: &str| {
        let mut writer = writer.borrow_mut();
        let _ = writeln!(writer, "{msg}").and_then(|_| writer.flush());
    })
}

/// Creates a logger which writes messages to the standard error.
pub fn create_stderr_logger() -> InfoLogger {
    create_writer_logger(std::io::stderr())
}
