// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the oops crate.
//!
//! This module is only available when the `test-util` feature is enabled.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

use crate::LogSink;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A [`LogSink`] that keeps every message in memory.
///
/// Clones share the same storage, so a clone can be handed to the code under test while the
/// original is used for assertions.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use oops::test_util::RecordingSink;
/// use oops::{ContextualError, Location, StackContext};
///
/// let sink = RecordingSink::new();
/// let context = StackContext::from(Location::new("app.py", 10));
/// let error = ContextualError::with_sink("boom", &context, &sink).unwrap();
///
/// assert_eq!(sink.messages(), [error.to_string()]);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl LogSink for RecordingSink {
    fn error(&self, message: &str) {
        lock(&self.messages).push(message.to_owned());
    }
}

/// Captures formatted `tracing` output in memory.
///
/// Install the subscriber for the current thread with
/// [`tracing::subscriber::set_default`] and inspect the output afterwards.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured log output as a string.
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }

    /// Returns the number of captured lines containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.output().lines().filter(|line| line.contains(needle)).count()
    }

    /// Asserts that the captured log output contains the given string.
    ///
    /// # Panics
    ///
    /// Panics if the captured log output does not contain the expected string.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub fn assert_contains(&self, expected: &str) {
        let output = self.output();
        assert!(output.contains(expected), "log output does not contain '{expected}', got:\n{output}");
    }

    /// Creates a `tracing` subscriber that writes to this capture buffer.
    #[must_use]
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(self.clone()).with_ansi(false))
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Writer that appends to a [`LogCapture`] buffer.
#[derive(Debug)]
pub struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        lock(&self.buffer).extend_from_slice(buf);
        Ok(buf.len())
    }

    #[cfg_attr(test, mutants::skip)] // nothing is buffered
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
