//! Propagation techniques.
//!
//! Each technique is a stateless rule applied across the whole board. The
//! solver runs them in a fixed order per pass: [`ForcedSingle`], then
//! [`HiddenSingle`], then [`NakedPair`].

use std::fmt::Debug;

use sudoq_core::{Board, Contradiction};

pub use self::{
    forced_single::ForcedSingle, hidden_single::HiddenSingle, naked_pair::NakedPair,
};

mod forced_single;
mod hidden_single;
mod naked_pair;

/// A sudoku propagation rule.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Applies the technique across the board.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The technique assigned a value or removed a candidate
    /// * `Ok(false)` - The board was left unchanged
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if an application drives some cell to an
    /// empty candidate set; the board state the technique leaves behind is
    /// then unsolvable.
    fn apply(&self, board: &mut Board) -> Result<bool, Contradiction>;
}
