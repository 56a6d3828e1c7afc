// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Display;

use crate::detail::PathStyle;
use crate::{ContextualError, Location, LogSink, TracingSink};

/// Extension trait for turning any displayable error into a [`ContextualError`] at the point
/// where it is handled.
///
/// The location is captured with [`Location::caller`](std::panic::Location::caller), so it
/// points at the line that calls [`contextualize`](Self::contextualize), not at the line that
/// produced the original error.
///
/// # Examples
///
/// ```rust
/// use oops::{ContextualError, ResultExt};
///
/// fn parse_port(raw: &str) -> Result<u16, ContextualError> {
///     raw.parse::<u16>().contextualize()
/// }
///
/// let error = parse_port("http").unwrap_err();
/// assert_eq!(error.message(), "invalid digit found in string");
/// assert!(error.to_string().starts_with("Error occurred in script: ["));
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in a [`ContextualError`] attributed to the caller, logging through
    /// [`TracingSink`].
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is an `Err`.
    #[track_caller]
    fn contextualize(self) -> Result<T, ContextualError>;

    /// Wraps the error in a [`ContextualError`] attributed to the caller, logging through `sink`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is an `Err`.
    #[track_caller]
    fn contextualize_with<S: LogSink + ?Sized>(self, sink: &S) -> Result<T, ContextualError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn contextualize(self) -> Result<T, ContextualError> {
        self.contextualize_with(&TracingSink)
    }

    #[track_caller]
    fn contextualize_with<S: LogSink + ?Sized>(self, sink: &S) -> Result<T, ContextualError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ContextualError::build_at(
                error.to_string(),
                &Location::caller(),
                PathStyle::Full,
                sink,
            )),
        }
    }
}
