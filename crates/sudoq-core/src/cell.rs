//! A single cell of the board.

use crate::{Digit, DigitSet};

/// One cell of the 9x9 grid: either an assigned digit or a set of remaining
/// candidates.
///
/// A fresh cell is unassigned with the full candidate set. Assignment clears
/// the candidates; while a cell is unassigned its candidate set must never
/// be empty (an empty set is a [`Contradiction`], raised by the board-level
/// operations that mutate cells).
///
/// `Cell` is `Copy`, so cloning a whole board for a search branch is a flat
/// value copy of 81 cells.
///
/// [`Contradiction`]: crate::Contradiction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates an unassigned cell with all 9 candidates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            candidates: DigitSet::FULL,
        }
    }

    /// Returns the assigned digit, or `None` while unassigned.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the remaining candidates. Empty once the cell is assigned.
    #[must_use]
    pub const fn candidates(&self) -> DigitSet {
        self.candidates
    }

    /// Returns `true` if the cell holds a final digit.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Removes a candidate. Returns `true` if it was present.
    pub(crate) const fn remove_candidate(&mut self, digit: Digit) -> bool {
        self.candidates.remove(digit)
    }

    /// Fixes the cell to `digit` and clears the candidates.
    pub(crate) const fn set_value(&mut self, digit: Digit) {
        self.value = Some(digit);
        self.candidates = DigitSet::EMPTY;
    }
}
