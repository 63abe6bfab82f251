use sudoq_core::{Board, Contradiction, Position};

use crate::technique::{ForcedSingle, HiddenSingle, NakedPair, Technique as _};

/// Guess depth used by [`Solver::new`].
pub const DEFAULT_GUESS_DEPTH: u32 = 3;

/// Consecutive propagation passes without a forced single before the solver
/// escalates to guessing. Only the forced-single rule resets the counter; a
/// pass that progresses through hidden singles or naked pairs alone still
/// counts toward the stall.
const STALL_THRESHOLD: u32 = 3;

/// A constraint-propagation solver with depth-bounded backtracking.
///
/// The solver repeatedly runs a propagation pass (forced single, hidden
/// single, naked pair, in that order) over its board. When propagation
/// stalls it picks the first cell with two or more candidates, and for each
/// candidate in ascending order clones the board, assigns the guess, and
/// recurses with one less level of guess budget. A successful branch's state
/// is adopted wholesale; a failed or contradictory branch is discarded.
///
/// # Examples
///
/// ```
/// use sudoq_core::Board;
/// use sudoq_solver::Solver;
///
/// let board: Board = "
///     29_ 34_ ___
///     7__ _9_ 265
///     5_1 _2_ _9_
///     _5_ 91_ _72
///     4_2 6_7 _51
///     9__ 2__ 6__
///     3_4 1_2 ___
///     12_ ___ _4_
///     ___ _79 _23
/// "
/// .parse()?;
///
/// let mut solver = Solver::new(board);
/// assert!(solver.solve());
/// assert!(solver.board().is_solved());
/// # Ok::<(), sudoq_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    max_guess_depth: u32,
}

impl Solver {
    /// Creates a solver with the default guess depth of
    /// [`DEFAULT_GUESS_DEPTH`].
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self::with_guess_depth(board, DEFAULT_GUESS_DEPTH)
    }

    /// Creates a solver with an explicit guess budget.
    ///
    /// The budget bounds the number of nested guesses, not propagation
    /// iterations; a budget of 0 disables search entirely.
    #[must_use]
    pub const fn with_guess_depth(board: Board, max_guess_depth: u32) -> Self {
        Self {
            board,
            max_guess_depth,
        }
    }

    /// Returns the board in its current state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solver and returns its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Solves the board in place.
    ///
    /// Returns `true` iff every cell holds a digit on return. A puzzle whose
    /// givens already contradict each other is reported as `false`, like a
    /// puzzle that merely exceeds the guess budget; use
    /// [`try_solve`](Self::try_solve) to tell the two apart.
    pub fn solve(&mut self) -> bool {
        match self.try_solve() {
            Ok(solved) => solved,
            Err(contradiction) => {
                log::debug!("puzzle is unsolvable: {contradiction}");
                false
            }
        }
    }

    /// Solves the board in place, surfacing a root-level [`Contradiction`]
    /// (unsolvable givens) as an error.
    ///
    /// Contradictions inside guess branches are handled internally as failed
    /// branches and never escape; an exhausted guess budget is an ordinary
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if propagation on the original,
    /// non-speculative board runs some cell out of candidates.
    pub fn try_solve(&mut self) -> Result<bool, Contradiction> {
        let mut stalled = 0;
        while !self.board.is_solved() {
            if stalled == STALL_THRESHOLD {
                return Ok(self.guess());
            }
            stalled += 1;
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("propagation pass on\n{}", self.board.pretty());
            }
            if ForcedSingle::new().apply(&mut self.board)? {
                stalled = 0;
            }
            HiddenSingle::new().apply(&mut self.board)?;
            NakedPair::new().apply(&mut self.board)?;
        }
        Ok(true)
    }

    /// Branches on the first cell with two or more candidates, trying each
    /// candidate on a clone of the board.
    fn guess(&mut self) -> bool {
        if self.max_guess_depth == 0 {
            log::debug!("guess budget exhausted, reporting unsolved");
            return false;
        }
        let Some(pos) = Position::ALL
            .iter()
            .copied()
            .find(|&pos| self.board[pos].candidates().len() >= 2)
        else {
            // A stalled, unsolved board always has such a cell: any lone
            // candidate would have been consumed as a forced single.
            unreachable!("stalled board has no cell with multiple candidates");
        };

        for digit in self.board[pos].candidates() {
            log::debug!(
                "guessing {digit} at {pos}, {} nested guesses left",
                self.max_guess_depth - 1
            );
            let mut trial = Self::with_guess_depth(self.board.clone(), self.max_guess_depth - 1);
            let solved =
                trial.board.assign(pos, digit).is_ok() && trial.try_solve().unwrap_or(false);
            if solved {
                self.board = trial.board;
                return true;
            }
            log::debug!("guess {digit} at {pos} failed, discarding branch");
        }
        false
    }
}
