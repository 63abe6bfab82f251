//! Constraint-propagation sudoku solver with depth-bounded backtracking.
//!
//! The solver drives propagation passes over a [`Board`](sudoq_core::Board):
//! forced singles, hidden singles, and naked pairs, in that order. When
//! propagation stalls it escalates to guessing — cloning the board, assigning
//! a candidate of the first ambiguous cell, and recursing with a reduced
//! guess budget. Contradictions inside a guess branch discard the branch;
//! a contradiction on the original board means the puzzle has no solution.
//!
//! # Examples
//!
//! ```
//! use sudoq_core::Board;
//! use sudoq_solver::Solver;
//!
//! let board: Board = "
//!     4__ __6 8__
//!     2__ 8__ __9
//!     9_1 __3 _56
//!     __9 68_ __2
//!     _1_ ___ 59_
//!     __8 __9 7__
//!     _24 _9_ ___
//!     1__ ___ 4__
//!     __7 3__ ___
//! "
//! .parse()?;
//!
//! let mut solver = Solver::new(board);
//! if solver.solve() {
//!     println!("{}", solver.board());
//! }
//! # Ok::<(), sudoq_core::ParseBoardError>(())
//! ```

pub use self::solver::{DEFAULT_GUESS_DEPTH, Solver};

mod solver;
pub mod technique;
