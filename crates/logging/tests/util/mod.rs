//! Shared helpers for the logging integration tests.
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use logging::LoggingService;

/// Cloneable in-memory writer capturing everything a service emits.
#[derive(Clone, Default)]
pub struct SharedBuf {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as UTF-8 text.
    pub fn contents(&self) -> String {
        let data = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&data).into_owned()
    }

    /// Returns the captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds a service whose output lands in the returned buffer.
pub fn capturing_service() -> (LoggingService, SharedBuf) {
    let buffer = SharedBuf::new();
    let service = LoggingService::with_writer(buffer.clone());
    (service, buffer)
}

/// Asserts a line is `<date> <time> <rest>` with the expected remainder.
pub fn assert_line(line: &str, expected_rest: &str) {
    let (stamp, rest) = split_timestamp(line);
    assert_timestamp(stamp);
    assert_eq!(rest, expected_rest, "unexpected body in {line:?}");
}

/// Splits a line into its 19-character timestamp and the remainder.
pub fn split_timestamp(line: &str) -> (&str, &str) {
    assert!(
        line.len() > 20,
        "line too short for a timestamp prefix: {line:?}"
    );
    (&line[..19], &line[20..])
}

/// Checks the `YYYY/MM/DD HH:MM:SS` shape without pinning the clock.
pub fn assert_timestamp(stamp: &str) {
    assert_eq!(stamp.len(), 19, "unexpected timestamp width: {stamp:?}");
    for (index, ch) in stamp.char_indices() {
        match index {
            4 | 7 => assert_eq!(ch, '/', "bad date separator in {stamp:?}"),
            10 => assert_eq!(ch, ' ', "bad date/time separator in {stamp:?}"),
            13 | 16 => assert_eq!(ch, ':', "bad time separator in {stamp:?}"),
            _ => assert!(ch.is_ascii_digit(), "non-digit in timestamp {stamp:?}"),
        }
    }
}
