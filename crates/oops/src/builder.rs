// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{ContextualError, LogSink, NullContext, PathStyle, StackContext, TracingSink};

/// Builder for creating [`ContextualError`] instances with custom configurations.
///
/// # Examples
///
/// ```rust
/// use oops::{ContextualError, Location, PathStyle, StackContext};
///
/// let context = StackContext::from(Location::new("src/handlers/upload.rs", 57));
/// let error = ContextualError::builder()
///     .path_style(PathStyle::FileName)
///     .build("payload too large", &context)?;
///
/// assert_eq!(
///     error.to_string(),
///     "Error occurred in script: [upload.rs] at line number: [57]: payload too large"
/// );
/// # Ok::<(), oops::NullContext>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContextualErrorBuilder<S = TracingSink> {
    path_style: PathStyle,
    sink: S,
}

impl Default for ContextualErrorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextualErrorBuilder {
    /// Creates a new [`ContextualErrorBuilder`] with default settings.
    ///
    /// Paths are rendered in full and messages are logged through [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            path_style: PathStyle::Full,
            sink: TracingSink,
        }
    }
}

impl<S: LogSink> ContextualErrorBuilder<S> {
    /// Sets how source file paths are rendered.
    #[must_use]
    pub fn path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// Sets the sink that receives the detailed message.
    #[must_use]
    pub fn sink<T: LogSink>(self, sink: T) -> ContextualErrorBuilder<T> {
        ContextualErrorBuilder {
            path_style: self.path_style,
            sink,
        }
    }

    /// Builds a [`ContextualError`] attributed to the innermost frame of `context`.
    ///
    /// The builder can be reused for further errors.
    ///
    /// # Errors
    ///
    /// Returns [`NullContext`] if `context` has no frames.
    pub fn build(&self, message: impl Into<String>, context: &StackContext) -> Result<ContextualError, NullContext> {
        ContextualError::build(message.into(), context, self.path_style, &self.sink)
    }

    /// Builds a [`ContextualError`] attributed to the caller's location.
    #[must_use]
    #[track_caller]
    pub fn build_here(&self, message: impl Into<String>) -> ContextualError {
        ContextualError::build_at(message.into(), &crate::Location::caller(), self.path_style, &self.sink)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;
    use crate::test_util::RecordingSink;

    #[test]
    fn defaults() {
        let builder = ContextualErrorBuilder::default();
        assert_eq!(builder.path_style, PathStyle::Full);
    }

    #[test]
    fn custom_sink_receives_message() {
        let sink = RecordingSink::new();
        let builder = ContextualError::builder().sink(sink.clone());
        let context = StackContext::from(Location::new("src/app.rs", 4));

        let error = builder.build("boom", &context).unwrap();

        assert_eq!(sink.messages(), [error.to_string()]);
        assert_eq!(error.to_string(), "Error occurred in script: [src/app.rs] at line number: [4]: boom");
    }

    #[test]
    fn path_style_survives_sink_change() {
        let sink = RecordingSink::new();
        let builder = ContextualError::builder().path_style(PathStyle::FileName).sink(sink.clone());
        let context = StackContext::from(Location::new("src/app.rs", 4));

        let error = builder.build("boom", &context).unwrap();

        assert_eq!(error.to_string(), "Error occurred in script: [app.rs] at line number: [4]: boom");
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn reusable() {
        let sink = RecordingSink::new();
        let builder = ContextualError::builder().sink(sink.clone());
        let context = StackContext::from(Location::new("a.rs", 1));

        let _first = builder.build("one", &context).unwrap();
        let _second = builder.build("two", &context).unwrap();

        assert_eq!(sink.messages().len(), 2);
    }

    #[test]
    fn empty_context_is_rejected() {
        let sink = RecordingSink::new();
        let result = ContextualError::builder().sink(sink.clone()).build("boom", &StackContext::empty());
        assert_eq!(result, Err(NullContext));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn build_here_points_at_caller() {
        let sink = RecordingSink::new();
        let builder = ContextualError::builder().path_style(PathStyle::FileName).sink(sink.clone());

        let expected_line = line!() + 1;
        let error = builder.build_here("late");

        assert_eq!(
            error.to_string(),
            format!("Error occurred in script: [builder.rs] at line number: [{expected_line}]: late")
        );
    }
}
