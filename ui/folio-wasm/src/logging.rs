//! `tracing` output to the browser console.
//!
//! Each formatted event is buffered and handed to `console.error`,
//! `console.warn` or `console.log` according to its level when the writer is
//! dropped. Timestamps are disabled: `SystemTime` is unavailable on
//! `wasm32-unknown-unknown`.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

pub struct ConsoleMakeWriter;

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => gloo_console::error!(line.to_owned()),
            Level::WARN => gloo_console::warn!(line.to_owned()),
            _ => gloo_console::log!(line.to_owned()),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Build the filter from `log_level` directives such as `info` or
/// `warn,folio_contact=debug`. Blank or malformed input means `info`.
pub fn env_filter(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    if directives.is_empty() {
        return EnvFilter::new("info");
    }
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(env_filter(directives))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn plain_level_sets_the_ceiling() {
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(" warn ").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter("off").max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn per_crate_directives_are_honoured() {
        let filter = env_filter("warn,folio_contact=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(filter.to_string().contains("folio_contact=debug"));
    }

    #[test]
    fn blank_or_malformed_falls_back_to_info() {
        assert_eq!(env_filter("").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            env_filter("folio_contact=chatty").max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
