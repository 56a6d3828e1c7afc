// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Display;

use crate::detail::{PathStyle, compose};
use crate::{ContextualErrorBuilder, Location, LogSink, StackContext, TracingSink};

/// The stack context handed to the formatter had no frames to attribute the error to.
///
/// This indicates misuse by the caller: the snapshot should be taken at the point where the
/// original error was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no active stack context to attribute the error to")]
pub struct NullContext;

/// An error that carries the source location where it was raised.
///
/// The detailed message is computed and logged once, when the error is constructed. Its
/// [`Display`] output is that detailed message, so any code that prints or logs the error sees
/// the file and line without knowing the concrete type. The original text stays available
/// through [`message`](Self::message).
///
/// # Examples
///
/// ```rust
/// use oops::{ContextualError, Location, StackContext};
///
/// let context = StackContext::from(Location::new("app.py", 10));
/// let error = ContextualError::new("division by zero", &context)?;
///
/// assert_eq!(error.message(), "division by zero");
/// assert_eq!(
///     error.to_string(),
///     "Error occurred in script: [app.py] at line number: [10]: division by zero"
/// );
/// # Ok::<(), oops::NullContext>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detailed_message}")]
pub struct ContextualError {
    message: String,
    detailed_message: String,
}

impl ContextualError {
    /// Creates an error attributed to the innermost frame of `context`, logging through
    /// [`TracingSink`].
    ///
    /// # Errors
    ///
    /// Returns [`NullContext`] if `context` has no frames.
    pub fn new(message: impl Into<String>, context: &StackContext) -> Result<Self, NullContext> {
        Self::with_sink(message, context, &TracingSink)
    }

    /// Creates an error attributed to the innermost frame of `context`, logging through `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`NullContext`] if `context` has no frames.
    pub fn with_sink<S>(message: impl Into<String>, context: &StackContext, sink: &S) -> Result<Self, NullContext>
    where
        S: LogSink + ?Sized,
    {
        Self::build(message.into(), context, PathStyle::Full, sink)
    }

    /// Creates an error attributed to the caller's location.
    ///
    /// The captured snapshot always has a frame, so this cannot fail.
    #[must_use]
    #[track_caller]
    pub fn here(message: impl Into<String>) -> Self {
        Self::build_at(message.into(), &Location::caller(), PathStyle::Full, &TracingSink)
    }

    /// Creates an error whose base message is the [`Display`] output of `error`.
    ///
    /// Only the text is kept; `error` itself is not retained.
    ///
    /// # Errors
    ///
    /// Returns [`NullContext`] if `context` has no frames.
    pub fn caused_by(error: &(impl Display + ?Sized), context: &StackContext) -> Result<Self, NullContext> {
        Self::new(error.to_string(), context)
    }

    /// Returns a builder for configuring the sink and path rendering.
    #[must_use]
    pub fn builder() -> ContextualErrorBuilder {
        ContextualErrorBuilder::new()
    }

    pub(crate) fn build<S>(message: String, context: &StackContext, path_style: PathStyle, sink: &S) -> Result<Self, NullContext>
    where
        S: LogSink + ?Sized,
    {
        let frame = context.innermost()?;
        Ok(Self::build_at(message, frame, path_style, sink))
    }

    pub(crate) fn build_at<S>(message: String, frame: &Location, path_style: PathStyle, sink: &S) -> Self
    where
        S: LogSink + ?Sized,
    {
        let detailed_message = compose(&message, frame, path_style, sink);
        Self { message, detailed_message }
    }

    /// The original message, without location details.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message with location details; identical to the [`Display`] output.
    #[must_use]
    pub fn detailed_message(&self) -> &str {
        &self.detailed_message
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::test_util::RecordingSink;

    assert_impl_all!(ContextualError: Send, Sync, std::error::Error);
    assert_impl_all!(NullContext: Send, Sync, std::error::Error);

    fn app_py() -> StackContext {
        StackContext::from(Location::new("app.py", 10))
    }

    #[test]
    fn display_is_detailed_message() {
        let sink = RecordingSink::new();
        let error = ContextualError::with_sink("division by zero", &app_py(), &sink).unwrap();
        insta::assert_snapshot!(error.to_string(), @"Error occurred in script: [app.py] at line number: [10]: division by zero");
        assert_eq!(error.detailed_message(), error.to_string());
    }

    #[test]
    fn base_message_preserved() {
        let sink = RecordingSink::new();
        let error = ContextualError::with_sink("division by zero", &app_py(), &sink).unwrap();
        assert_eq!(error.message(), "division by zero");
    }

    #[test]
    fn repeated_reads_are_identical() {
        let sink = RecordingSink::new();
        let error = ContextualError::with_sink("boom", &app_py(), &sink).unwrap();
        let first = error.to_string();
        let second = error.to_string();
        assert_eq!(first, second);
        assert_eq!(format!("{error}"), first);
        assert_eq!(sink.messages().len(), 1, "display must not log again");
    }

    #[test]
    fn empty_context() {
        let sink = RecordingSink::new();
        let result = ContextualError::with_sink("boom", &StackContext::empty(), &sink);
        assert_eq!(result, Err(NullContext));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn here_points_at_caller() {
        let expected_line = line!() + 1;
        let error = ContextualError::here("lost");
        assert!(error.to_string().contains("error.rs]"), "{error}");
        assert!(error.to_string().ends_with(&format!("at line number: [{expected_line}]: lost")), "{error}");
    }

    #[test]
    fn caused_by_keeps_text_only() {
        let io_error = std::io::Error::other("permission denied");
        let error = ContextualError::caused_by(&io_error, &app_py()).unwrap();
        assert_eq!(error.message(), "permission denied");
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn null_context_display() {
        assert_eq!(NullContext.to_string(), "no active stack context to attribute the error to");
    }

    #[test]
    fn debug_shows_both_messages() {
        let sink = RecordingSink::new();
        let error = ContextualError::with_sink("boom", &app_py(), &sink).unwrap();
        let debug = format!("{error:?}");
        assert!(debug.contains("message: \"boom\""), "{debug}");
        assert!(debug.contains("detailed_message: \"Error occurred in script"), "{debug}");
    }
}
