// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

/// Name attached to every event emitted by [`TracingSink`].
pub const ERROR_EVENT_NAME: &str = "oops.error";

/// Destination for detailed error messages.
///
/// The formatter calls [`error`](Self::error) exactly once per formatted message. Setting up the
/// destination (console, file, remote collector) is the sink's own business.
pub trait LogSink {
    /// Records `message` at error severity.
    fn error(&self, message: &str);
}

/// Sink that forwards messages to [`tracing`] at [`Level::ERROR`](tracing::Level::ERROR).
///
/// This is the default sink. Records go to whichever subscriber is active for the current thread,
/// so installing one is the application's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::event!(name: ERROR_EVENT_NAME, tracing::Level::ERROR, "{message}");
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
