// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Errors that remember where they were raised.
//!
//! Oops attaches the source file and line of the point where an error was handled to the error
//! itself, logs the result once, and exposes it as the error's [`Display`](std::fmt::Display)
//! output. Anything that prints the error later sees the location without knowing the type.
//!
//! # Key Features
//!
//! - [**`ContextualError`**](ContextualError): Error type holding the original message and the detailed, located one
//! - [**`format_error_detail`**](format_error_detail): Standalone formatter for ad hoc messages
//! - [**`StackContext`**](StackContext): Explicit snapshot of the frames at the catch site
//! - [**`LogSink`**](LogSink): Destination for detailed messages, [`TracingSink`] by default
//! - [**`ResultExt`**](ResultExt): `.contextualize()` for any `Result` whose error is displayable
//! - [**`contextual_err!`**](contextual_err) and [**`bail!`**](bail): Construct or return errors at the invocation site
//!
//! # Quick Start
//!
//! ```rust
//! use oops::ContextualError;
//!
//! fn divide(numerator: i32, denominator: i32) -> Result<i32, ContextualError> {
//!     numerator.checked_div(denominator).ok_or_else(|| ContextualError::here("division by zero"))
//! }
//!
//! let error = divide(1, 0).unwrap_err();
//! assert_eq!(error.message(), "division by zero");
//! assert!(error.to_string().starts_with("Error occurred in script: ["));
//! ```
//!
//! # Message Format
//!
//! Detailed messages always have the shape:
//!
//! ```text
//! Error occurred in script: [<file>] at line number: [<line>]: <message>
//! ```
//!
//! The file and line come from the innermost frame of the [`StackContext`]. A context can be
//! captured at the call site with [`StackContext::capture`] or assembled from explicit
//! [`Location`] values:
//!
//! ```rust
//! use oops::{ContextualError, Location, StackContext};
//!
//! let context = StackContext::from(Location::new("app.py", 10));
//! let error = ContextualError::new("division by zero", &context)?;
//! assert_eq!(
//!     error.to_string(),
//!     "Error occurred in script: [app.py] at line number: [10]: division by zero"
//! );
//! # Ok::<(), oops::NullContext>(())
//! ```
//!
//! An empty context has no frame to point at, so formatting fails with [`NullContext`].
//!
//! # Logging
//!
//! Every detailed message is handed to a [`LogSink`] exactly once, when it is formatted. The
//! default [`TracingSink`] emits a `tracing` event at error level named `oops.error`; install a
//! subscriber to see it. Use [`ContextualError::with_sink`], [`format_error_detail_with`] or the
//! [`builder`](ContextualError::builder) to route messages elsewhere.
//!
//! # Configuration
//!
//! [`ContextualErrorBuilder`] controls the sink and how paths are rendered:
//!
//! ```rust
//! use oops::{ContextualError, PathStyle};
//!
//! let builder = ContextualError::builder().path_style(PathStyle::FileName);
//! let error = builder.build_here("cache miss");
//! assert_eq!(error.message(), "cache miss");
//! assert!(error.to_string().ends_with("]: cache miss"));
//! ```

mod builder;
mod detail;
mod error;
mod location;
mod macros;
mod result_ext;
mod sink;
mod stack_context;

#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;

pub use builder::ContextualErrorBuilder;
pub use detail::{PathStyle, format_error_detail, format_error_detail_with};
pub use error::{ContextualError, NullContext};
pub use location::Location;
pub use result_ext::ResultExt;
pub use sink::{ERROR_EVENT_NAME, LogSink, TracingSink};
pub use stack_context::StackContext;
