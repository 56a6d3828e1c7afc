// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Source location of a single stack frame (file and line).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    file: Cow<'static, str>,
    line: u32,
}

impl Location {
    /// Creates a new location with file and line information.
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self { file: file.into(), line }
    }

    /// Returns the location of the caller.
    ///
    /// It uses [`Location::caller`](std::panic::Location::caller), so the captured frame is the
    /// outermost function in the `#[track_caller]` chain.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line())
    }

    /// The source file path, as captured.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line number within [`file`](Self::file).
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The last component of the file path, or the whole path if it has none.
    #[must_use]
    pub fn file_name(&self) -> &str {
        Path::new(self.file.as_ref())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
