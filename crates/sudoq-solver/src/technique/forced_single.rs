use sudoq_core::{Board, Contradiction, Position};

use crate::technique::Technique;

const NAME: &str = "forced single";

/// A technique that assigns the first cell with exactly one remaining
/// candidate.
///
/// Only the first such cell in index order is assigned per application;
/// subsequent passes pick up the rest. This single-step behavior is what the
/// solver's stall counter observes: a pass in which no cell anywhere had a
/// lone candidate counts toward escalating to search.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForcedSingle;

impl ForcedSingle {
    /// Creates a new `ForcedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        ForcedSingle
    }
}

impl Technique for ForcedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board) -> Result<bool, Contradiction> {
        let forced = Position::ALL
            .iter()
            .copied()
            .find(|&pos| board[pos].candidates().len() == 1);
        let Some(pos) = forced else {
            return Ok(false);
        };
        board.assign_sole(pos)?;
        Ok(true)
    }
}
