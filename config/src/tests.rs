//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_red_zone_fits_in_stack_segment() {
    assert!(
        STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES,
        "red zone must be smaller than the allocated segment"
    );
}

#[test]
fn test_nesting_depth_is_positive() {
    assert!(MAX_NESTING_DEPTH > 0);
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_separators_are_not_empty() {
    assert!(!STATEMENT_TERMINATOR.is_empty());
    assert!(!ARGUMENT_SEPARATOR.is_empty());
    assert!(!STATEMENT_SEPARATOR.is_empty());
}

#[test]
fn test_default_program_is_balanced() {
    let open = DEFAULT_PROGRAM.matches('(').count();
    let close = DEFAULT_PROGRAM.matches(')').count();
    assert_eq!(open, close);
}
