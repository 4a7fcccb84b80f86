// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Log capture for tests
//!
//! Runs a closure under a scoped `tracing` subscriber that writes plain-text
//! lines into memory, so tests can assert on what was logged and at which
//! level without a global subscriber.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for formatted log lines
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Log lines captured by [`capture_logs`]
#[derive(Debug, Clone)]
pub struct CapturedLogs {
    output: String,
}

impl CapturedLogs {
    /// All captured lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines()
    }

    /// Lines emitted at the given level
    pub fn at_level(&self, level: tracing::Level) -> Vec<&str> {
        let prefix = level.as_str();
        self.lines()
            .filter(|line| line.trim_start().starts_with(prefix))
            .collect()
    }

    /// Number of error-level events
    pub fn error_count(&self) -> usize {
        self.at_level(tracing::Level::ERROR).len()
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }
}

/// Run `f` with a thread-local subscriber and return its result plus the logs
pub fn capture_logs<F, R>(f: F) -> (R, CapturedLogs)
where
    F: FnOnce() -> R,
{
    let buffer = LogBuffer::default();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    (
        result,
        CapturedLogs {
            output: buffer.contents(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_counts_levels() {
        let ((), logs) = capture_logs(|| {
            tracing::info!("starting");
            tracing::error!("first failure");
            tracing::warn!("careful");
            tracing::error!("second failure");
        });

        assert_eq!(logs.error_count(), 2);
        assert_eq!(logs.at_level(tracing::Level::INFO).len(), 1);
        assert!(logs.contains("second failure"));
    }

    #[test]
    fn test_capture_returns_closure_result() {
        let (value, logs) = capture_logs(|| 7);
        assert_eq!(value, 7);
        assert_eq!(logs.lines().count(), 0);
    }
}
