//! Error types for board construction and mutation.

use crate::Position;

/// A board state that admits no solution: some cell can no longer hold any
/// value.
///
/// This is raised when elimination empties an unassigned cell's candidate
/// set, or when an elimination conflicts with a digit already assigned to
/// the cell. During backtracking search it is an ordinary outcome meaning
/// "this guess branch is unsolvable"; raised from the original (non-cloned)
/// board it means the puzzle itself has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal value remains at cell {position}")]
pub struct Contradiction {
    /// The cell left without a legal value.
    pub position: Position,
}

/// Malformed puzzle text: the row or character counts are wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The puzzle does not have exactly 9 rows.
    #[display("expected 9 rows, got {_0}")]
    RowCount(#[error(not(source))] usize),
    /// A row does not have exactly 9 characters.
    #[display("row {row} has {len} characters, expected 9")]
    RowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of characters found in the row.
        len: usize,
    },
}

/// Failure to construct a [`Board`](crate::Board) from puzzle text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum ParseBoardError {
    /// The text does not form a 9x9 grid.
    #[display("malformed puzzle: {_0}")]
    Format(FormatError),
    /// The givens contradict each other.
    #[display("conflicting givens: {_0}")]
    Contradiction(Contradiction),
}
