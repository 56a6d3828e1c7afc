// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Macros for constructing [`ContextualError`](crate::ContextualError) in place.

/// Construct a [`ContextualError`](crate::ContextualError) attributed to the invocation site.
///
/// The macro accepts:
/// - A string literal: `contextual_err!("error message")`
/// - A format string with arguments: `contextual_err!("error: {value}")`
/// - Any displayable expression, such as another error: `contextual_err!(io_error)`
///
/// The detailed message is logged through [`TracingSink`](crate::TracingSink).
///
/// # Examples
///
/// ```rust
/// use oops::contextual_err;
///
/// let error = contextual_err!("queue {} is full", "ingest");
/// assert_eq!(error.message(), "queue ingest is full");
/// ```
///
/// ```rust
/// use oops::contextual_err;
///
/// let result = std::fs::read_to_string("/definitely/not/here").map_err(|e| contextual_err!(e));
/// assert!(result.is_err());
/// ```
#[macro_export]
macro_rules! contextual_err {
    ($msg:literal $(,)?) => {
        $crate::ContextualError::here(::std::format!($msg))
    };
    ($fmt:literal, $($arg:tt)*) => {
        $crate::ContextualError::here(::std::format!($fmt, $($arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::ContextualError::here(::std::string::ToString::to_string(&$err))
    };
}

/// Return early with a [`ContextualError`](crate::ContextualError) attributed to the invocation
/// site.
///
/// Accepts the same forms as [`contextual_err!`]. The error is converted with [`From`], so the
/// enclosing function may return any error type that can be built from a `ContextualError`.
///
/// # Examples
///
/// ```rust
/// use oops::{ContextualError, bail};
///
/// fn check_ratio(numerator: u32, denominator: u32) -> Result<u32, ContextualError> {
///     if denominator == 0 {
///         bail!("division by zero");
///     }
///     Ok(numerator / denominator)
/// }
///
/// let error = check_ratio(1, 0).unwrap_err();
/// assert_eq!(error.message(), "division by zero");
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::contextual_err!($($arg)+)))
    };
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use crate::ContextualError;

    #[test]
    fn literal() {
        let error = contextual_err!("plain");
        assert_eq!(error.message(), "plain");
        assert!(error.to_string().contains("macros.rs]"), "{error}");
    }

    #[test]
    fn inline_arguments() {
        let shard = 3;
        let error = contextual_err!("shard {shard} unavailable");
        assert_eq!(error.message(), "shard 3 unavailable");
    }

    #[test]
    fn format_arguments() {
        let error = contextual_err!("{} of {} replicas down", 2, 5);
        assert_eq!(error.message(), "2 of 5 replicas down");
    }

    #[test]
    fn expression() {
        let io_error = std::io::Error::other("broken pipe");
        let error = contextual_err!(io_error);
        assert_eq!(error.message(), "broken pipe");
    }

    #[test]
    fn points_at_invocation() {
        let expected_line = line!() + 1;
        let error = contextual_err!("here");
        assert!(error.to_string().ends_with(&format!("at line number: [{expected_line}]: here")), "{error}");
    }

    #[test]
    fn bail_returns_early() {
        fn guarded(flag: bool) -> Result<u8, ContextualError> {
            if flag {
                bail!("flag {} rejected", flag);
            }
            Ok(1)
        }

        assert_eq!(guarded(false), Ok(1));
        assert_eq!(guarded(true).unwrap_err().message(), "flag true rejected");
    }

    #[test]
    fn bail_converts_into_caller_error() {
        #[derive(Debug)]
        struct Wrapped(String);

        impl From<ContextualError> for Wrapped {
            fn from(error: ContextualError) -> Self {
                Self(error.message().to_owned())
            }
        }

        fn fails() -> Result<(), Wrapped> {
            bail!("converted");
        }

        assert_eq!(fails().unwrap_err().0, "converted");
    }
}
