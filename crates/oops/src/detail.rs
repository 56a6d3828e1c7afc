// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::{Location, LogSink, NullContext, StackContext, TracingSink};

/// How the source file of a frame is rendered in detailed messages.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// The path exactly as it was captured.
    #[default]
    Full,
    /// Only the last component of the path.
    FileName,
}

/// Formats `error` with the file and line of the innermost frame of `context` and logs the
/// result through [`TracingSink`].
///
/// The returned string has the shape
/// `Error occurred in script: [<file>] at line number: [<line>]: <error>`.
///
/// # Errors
///
/// Returns [`NullContext`] if `context` has no frames. Nothing is logged in that case.
///
/// # Examples
///
/// ```rust
/// use oops::{Location, StackContext, format_error_detail};
///
/// let context = StackContext::from(Location::new("app.py", 10));
/// let detail = format_error_detail("division by zero", &context)?;
/// assert_eq!(detail, "Error occurred in script: [app.py] at line number: [10]: division by zero");
/// # Ok::<(), oops::NullContext>(())
/// ```
pub fn format_error_detail<E>(error: &E, context: &StackContext) -> Result<String, NullContext>
where
    E: fmt::Display + ?Sized,
{
    format_error_detail_with(error, context, &TracingSink)
}

/// Like [`format_error_detail`], but logs through the given `sink`.
///
/// # Errors
///
/// Returns [`NullContext`] if `context` has no frames. Nothing is logged in that case.
pub fn format_error_detail_with<E, S>(error: &E, context: &StackContext, sink: &S) -> Result<String, NullContext>
where
    E: fmt::Display + ?Sized,
    S: LogSink + ?Sized,
{
    render(error, context, PathStyle::Full, sink)
}

pub(crate) fn render<E, S>(error: &E, context: &StackContext, path_style: PathStyle, sink: &S) -> Result<String, NullContext>
where
    E: fmt::Display + ?Sized,
    S: LogSink + ?Sized,
{
    let frame = context.innermost()?;
    Ok(compose(error, frame, path_style, sink))
}

pub(crate) fn compose<E, S>(error: &E, frame: &Location, path_style: PathStyle, sink: &S) -> String
where
    E: fmt::Display + ?Sized,
    S: LogSink + ?Sized,
{
    let detail = DetailFormatter { frame, path_style, error }.to_string();
    sink.error(&detail);
    detail
}

struct DetailFormatter<'a, E: ?Sized> {
    frame: &'a Location,
    path_style: PathStyle,
    error: &'a E,
}

impl<E: fmt::Display + ?Sized> fmt::Display for DetailFormatter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = match self.path_style {
            PathStyle::Full => self.frame.file(),
            PathStyle::FileName => self.frame.file_name(),
        };

        write!(
            f,
            "Error occurred in script: [{file}] at line number: [{line}]: {error}",
            line = self.frame.line(),
            error = self.error
        )
    }
}
