//! Outcomes of navigation requests.
//!
//! Navigation never surfaces recoverable errors on the normal path. Invalid
//! requests are absorbed and overlapping requests are dropped; the awaitable
//! form of every operation resolves to a [`NavigationResult`] describing which
//! of those happened:
//!
//! - [`NavigationResult::Applied`]: the state changed (and, for animated
//!   directions, the settle wait has elapsed).
//! - [`NavigationResult::Ignored`]: the request had no effect, e.g. `pop` on
//!   an empty path or `dismiss` at the root.
//! - [`NavigationResult::Dropped`]: another transition was in flight.
//! - [`NavigationResult::Error`]: only multi-step sequences produce this, when
//!   the router is released before the sequence finished.
//!
//! # Examples
//!
//! ```
//! use gpui_stack_router::{NavigationError, NavigationResult};
//!
//! assert!(NavigationResult::Applied.is_applied());
//! assert!(NavigationResult::Dropped.is_dropped());
//!
//! let released = NavigationResult::Error(NavigationError::RouterReleased);
//! assert_eq!(released.error(), Some(&NavigationError::RouterReleased));
//! ```

use std::fmt;

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// The state was changed.
    Applied,
    /// The request was valid but would not change anything.
    Ignored,
    /// The gate was closed by another transition; nothing was changed.
    Dropped,
    /// A multi-step sequence could not run to completion.
    Error(NavigationError),
}

/// Detailed errors for the few fallible router entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// An empty path list was supplied; the root level can never be removed.
    EmptyPaths,

    /// The router entity was released while a sequence was still running.
    RouterReleased,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::EmptyPaths => {
                write!(f, "There must be at least one path to provide a root screen")
            }
            NavigationError::RouterReleased => {
                write!(f, "Router was released before navigation finished")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl NavigationResult {
    /// Check if the request changed the state.
    pub fn is_applied(&self) -> bool {
        matches!(self, NavigationResult::Applied)
    }

    /// Check if the request was absorbed as a no-op.
    pub fn is_ignored(&self) -> bool {
        matches!(self, NavigationResult::Ignored)
    }

    /// Check if the request was dropped because the gate was closed.
    pub fn is_dropped(&self) -> bool {
        matches!(self, NavigationResult::Dropped)
    }

    /// Check if there was an error.
    pub fn is_error(&self) -> bool {
        matches!(self, NavigationResult::Error(_))
    }

    /// Get the error, if any.
    pub fn error(&self) -> Option<&NavigationError> {
        match self {
            NavigationResult::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<NavigationError> for NavigationResult {
    fn from(error: NavigationError) -> Self {
        NavigationResult::Error(error)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_result_applied() {
        let result = NavigationResult::Applied;
        assert!(result.is_applied());
        assert!(!result.is_ignored());
        assert!(!result.is_dropped());
        assert!(!result.is_error());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_navigation_result_dropped() {
        let result = NavigationResult::Dropped;
        assert!(result.is_dropped());
        assert!(!result.is_applied());
    }

    #[test]
    fn test_navigation_result_from_error() {
        let result: NavigationResult = NavigationError::RouterReleased.into();
        assert!(result.is_error());
        assert_eq!(result.error(), Some(&NavigationError::RouterReleased));
    }

    #[test]
    fn test_navigation_error_display() {
        assert_eq!(
            NavigationError::EmptyPaths.to_string(),
            "There must be at least one path to provide a root screen"
        );
        assert_eq!(
            NavigationError::RouterReleased.to_string(),
            "Router was released before navigation finished"
        );
    }
}
