use std::io;

use tracing_subscriber::fmt::MakeWriter;

use crate::config::EnvConfig;
use crate::error::TelemetryError;

/// Install the global `tracing` subscriber.
///
/// Browsers have no clock `tracing-subscriber` can read, so timestamps are
/// off; each formatted line goes to `console.log` on wasm, stderr elsewhere.
pub fn init(config: &EnvConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Buffers one event and emits it on flush / drop.
#[derive(Default)]
pub(crate) struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(line.trim_end());
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_clears_buffer_on_flush() {
        let mut w = ConsoleMakeWriter.make_writer();
        w.write_all(b"modal opened\n").expect("write");
        assert!(!w.buf.is_empty());
        w.flush().expect("flush");
        assert!(w.buf.is_empty());
    }

    #[test]
    fn test_second_init_reports_already_installed() {
        let config = EnvConfig::default();
        let _ = init(&config);
        assert!(matches!(
            init(&config),
            Err(TelemetryError::AlreadyInstalled(_))
        ));
    }
}
