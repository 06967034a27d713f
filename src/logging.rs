//! Logging setup
//!
//! Log lines are human-readable: local timestamp, level, message. The
//! subscriber is built explicitly and can write to any sink, so callers
//! (tests included) decide where output goes instead of relying on ambient
//! global state.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Timestamp layout used in every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Builds the level filter for the given verbosity
///
/// * quiet: errors only
/// * 0: crate at INFO, dependencies at WARN
/// * 1: crate at DEBUG
/// * 2+: everything at TRACE
pub fn level_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    }
}

/// Builds a subscriber that writes formatted lines to `writer`
pub fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .finish()
}

/// Installs the process-wide subscriber writing to stderr
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(verbose: u8, quiet: bool) {
    let subscriber = build_subscriber(level_filter(verbose, quiet), io::stderr);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// In-memory log sink
///
/// Clones share the same buffer, so one clone can be handed to
/// [`build_subscriber`] while another reads the output back.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Writer handle returned by [`LogBuffer`]
pub struct LogBufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogBufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogBufferWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}
