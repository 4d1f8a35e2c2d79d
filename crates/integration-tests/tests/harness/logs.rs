//! Capture JSON log events emitted on the current thread

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::subscriber::DefaultGuard;

/// Buffer shared between the subscriber and the test
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captured log output, installed as the thread's default subscriber
pub struct CapturedLogs {
    buffer: SharedBuffer,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    /// Start capturing; events are recorded until the value is dropped
    pub fn start() -> Self {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();

        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        Self {
            buffer,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    /// Parsed events at `ERROR` level
    pub fn errors(&self) -> Vec<Value> {
        let raw = self.buffer.0.lock().unwrap().clone();

        String::from_utf8(raw)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap())
            .filter(|event| event["level"] == "ERROR")
            .collect()
    }
}
