//! Structured error types for the puzzle engine.
//!
//! Only contract violations are errors: a rod index outside the puzzle, or
//! misuse of the rod container itself. An illegal but well-formed move is an
//! expected outcome, reported as `Ok(false)` by the legality and move
//! operations — never through this enum.

/// Errors raised for contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// A rod index was outside `[0, rod_count)`.
    #[error("rod index {index} out of range for {rod_count} rods")]
    RodOutOfRange { index: usize, rod_count: usize },

    /// `Rod::pop` was called on an empty rod.
    #[error("cannot pop from an empty rod")]
    EmptyRod,

    /// `Rod::push` was called on a rod already at capacity.
    #[error("cannot push onto a full rod (capacity {capacity})")]
    FullRod { capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PuzzleError::RodOutOfRange {
            index: 5,
            rod_count: 3,
        };
        assert_eq!(format!("{}", err), "rod index 5 out of range for 3 rods");

        assert_eq!(
            format!("{}", PuzzleError::EmptyRod),
            "cannot pop from an empty rod"
        );
        assert_eq!(
            format!("{}", PuzzleError::FullRod { capacity: 4 }),
            "cannot push onto a full rod (capacity 4)"
        );
    }
}
