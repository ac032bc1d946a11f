//! Log capture for unit tests
//!
//! One global logger records into a thread-local buffer, so parallel tests
//! only see the records emitted on their own thread.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static INIT: Once = Once::new();

/// Install the recording logger (once per process) and clear this thread's records.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_boxed_logger(Box::new(RecordingLogger)).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Records emitted on this thread since the last [`capture_logs`].
pub fn logged() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}

/// Messages logged at exactly `level`.
pub fn logged_at(level: Level) -> Vec<String> {
    logged()
        .into_iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message)
        .collect()
}
