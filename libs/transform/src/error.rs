//! # Transform Errors
//!
//! Every variant signals a bug in the pipeline, never bad user input: the
//! parser only hands over well-formed trees.

use thiserror::Error;

/// Errors that can occur while building the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The insertion stack was empty when a node needed a home.
    #[error("no insertion target on the frame stack")]
    NoInsertionTarget,

    /// A leave callback named a frame that is not open.
    #[error("frame {frame} cannot be closed with {depth} frames open")]
    FrameOutOfRange {
        /// Frame index handed back by `enter`.
        frame: usize,
        /// Stack depth at the time of the leave.
        depth: usize,
    },

    /// Call frames were still open when traversal finished.
    #[error("{open} insertion frames left open after traversal")]
    UnbalancedFrames {
        /// Frames above the program body.
        open: usize,
    },

    /// The arena did not describe a tree.
    #[error("malformed target tree: {0}")]
    MalformedTree(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::FrameOutOfRange { frame: 3, depth: 2 };
        assert_eq!(err.to_string(), "frame 3 cannot be closed with 2 frames open");
    }
}
