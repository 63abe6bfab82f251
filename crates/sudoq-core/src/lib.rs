//! Core data model for 9x9 sudoku boards.
//!
//! This crate provides the grid representation shared by the solver and the
//! command-line front end: type-safe [`Digit`]s, bitset [`DigitSet`]
//! candidate sets, geometric [`Position`]s and [`House`]s, and the [`Board`]
//! with eager elimination propagation, parsing, and rendering.
//!
//! # Examples
//!
//! ```
//! use sudoq_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.assign(Position::new(0, 0), Digit::D5)?;
//!
//! // The digit is no longer a candidate anywhere in the first row.
//! assert!(!board[Position::new(8, 0)].candidates().contains(Digit::D5));
//! # Ok::<(), sudoq_core::Contradiction>(())
//! ```

pub use self::{
    board::Board,
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{Contradiction, FormatError, ParseBoardError},
    house::House,
    position::Position,
};

mod board;
mod cell;
mod digit;
pub mod digit_set;
mod error;
mod house;
mod position;
