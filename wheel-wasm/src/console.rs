use std::io;

use tracing::Level;

use crate::utils::log;

/// Buffers one formatted event and hands it to `sink` (`console.log` by
/// default) when dropped.
pub struct ConsoleWriter {
    buf: Vec<u8>,
    sink: fn(&str),
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        ConsoleWriter::with_sink(log)
    }
}

impl ConsoleWriter {
    pub fn with_sink(sink: fn(&str)) -> Self {
        ConsoleWriter {
            buf: Vec::new(),
            sink,
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        if !text.is_empty() {
            (self.sink)(text);
        }
    }
}

/// Route `tracing` events from the core crate to the browser console.
/// Only the first call installs the subscriber.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .try_init();
}
