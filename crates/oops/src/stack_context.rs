// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Location, NullContext};

/// A snapshot of the call stack at the point where an error was caught.
///
/// Frames are ordered outermost first, so the most recent frame is the last one. The snapshot is
/// an ordinary owned value: it is taken explicitly at the catch site rather than read from
/// ambient runtime state later, which means it can be moved across threads or stored freely.
///
/// An empty snapshot represents "no active stack context". Formatting an error against it fails
/// with [`NullContext`].
///
/// # Examples
///
/// ```rust
/// use oops::{Location, StackContext};
///
/// let here = StackContext::capture();
/// assert!(here.is_active());
///
/// let explicit = StackContext::from(Location::new("app.py", 10));
/// assert_eq!(explicit.innermost().unwrap().line(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackContext {
    frames: Vec<Location>,
}

impl StackContext {
    /// Captures a snapshot containing the caller's location.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        Self::from(Location::caller())
    }

    /// Creates a snapshot with no frames.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a snapshot from frames ordered outermost first.
    #[must_use]
    pub fn from_frames(frames: impl IntoIterator<Item = Location>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Pushes a new innermost frame.
    pub fn push(&mut self, frame: Location) {
        self.frames.push(frame);
    }

    /// All frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[Location] {
        &self.frames
    }

    /// Returns `true` if the snapshot has at least one frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Returns the most recent frame.
    ///
    /// # Errors
    ///
    /// Returns [`NullContext`] if the snapshot has no frames.
    pub fn innermost(&self) -> Result<&Location, NullContext> {
        self.frames.last().ok_or(NullContext)
    }
}

impl From<Location> for StackContext {
    fn from(frame: Location) -> Self {
        Self { frames: vec![frame] }
    }
}

impl FromIterator<Location> for StackContext {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self::from_frames(iter)
    }
}
