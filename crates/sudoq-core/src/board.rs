//! The 9x9 board: cell storage, parsing, propagation, and rendering.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Contradiction, Digit, FormatError, ParseBoardError, Position};

/// A 9x9 sudoku board.
///
/// The board owns a flat array of 81 [`Cell`]s addressed by [`Position`].
/// The 27 houses (rows, columns, boxes) are derived from geometry via
/// [`Position::houses`] and [`House::positions`](crate::House::positions);
/// they are not stored, so `clone()` is a flat copy of cell state and search
/// branches are cheap.
///
/// Assignments propagate eagerly: placing a digit eliminates it from every
/// peer cell, and an elimination that leaves an unassigned cell without
/// candidates surfaces as a [`Contradiction`] rather than a panic.
///
/// # Examples
///
/// ```
/// use sudoq_core::Board;
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// assert!(!board.is_solved());
/// # Ok::<(), sudoq_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board: every cell unassigned with all 9 candidates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); 81],
        }
    }

    /// Builds a board from exactly 9 rows of exactly 9 characters each.
    ///
    /// Digits `'1'`-`'9'` are assigned as givens, in row-major order, with
    /// full elimination propagation after each one. Any other character is a
    /// blank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::Format`] if the row or character counts
    /// are wrong, and [`ParseBoardError::Contradiction`] if the givens
    /// conflict with each other. No partially constructed board is
    /// observable in either case.
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, ParseBoardError>
    where
        S: AsRef<str>,
    {
        if rows.len() != 9 {
            return Err(FormatError::RowCount(rows.len()).into());
        }
        let mut board = Self::new();
        for (y, row) in (0u8..).zip(rows) {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != 9 {
                return Err(FormatError::RowLength {
                    row: usize::from(y),
                    len,
                }
                .into());
            }
            for (x, c) in (0u8..).zip(row.chars()) {
                if let Some(digit) = Digit::from_char(c) {
                    board.assign(Position::new(x, y), digit)?;
                }
            }
        }
        Ok(board)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Returns all 81 cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 81] {
        &self.cells
    }

    /// Returns `true` once every cell holds a digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_assigned)
    }

    /// Assigns `digit` to the cell at `pos` and eliminates it from every
    /// peer cell sharing a house with `pos`.
    ///
    /// Assigning to an already-assigned cell is a no-op and triggers no
    /// further elimination.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if propagation leaves some unassigned cell
    /// without candidates or conflicts with an assigned peer.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        if self.cells[pos.index()].is_assigned() {
            return Ok(());
        }
        self.cells[pos.index()].set_value(digit);
        for house in pos.houses() {
            for other in house.positions() {
                if other != pos {
                    self.eliminate(other, digit)?;
                }
            }
        }
        Ok(())
    }

    /// Assigns the sole remaining candidate of the cell at `pos`.
    ///
    /// Like [`assign`](Self::assign), this is a no-op on an already-assigned
    /// cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is unassigned with more than one candidate;
    /// calling this without a settled candidate is a contract violation, not
    /// a puzzle contradiction.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] under the same conditions as
    /// [`assign`](Self::assign).
    pub fn assign_sole(&mut self, pos: Position) -> Result<(), Contradiction> {
        let cell = &self.cells[pos.index()];
        if cell.is_assigned() {
            return Ok(());
        }
        let digit = cell
            .candidates()
            .as_single()
            .unwrap_or_else(|| panic!("cell {pos} does not have exactly one candidate"));
        self.assign(pos, digit)
    }

    /// Removes `digit` from the candidates of the cell at `pos`.
    ///
    /// Eliminating a candidate that is already absent is a no-op. Returns
    /// `true` if the candidate was present and removed.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the cell is already assigned `digit`,
    /// or if the removal leaves the unassigned cell with no candidates.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<bool, Contradiction> {
        let cell = &mut self.cells[pos.index()];
        if cell.value() == Some(digit) {
            return Err(Contradiction { position: pos });
        }
        let removed = cell.remove_candidate(digit);
        if removed && !cell.is_assigned() && cell.candidates().is_empty() {
            return Err(Contradiction { position: pos });
        }
        Ok(removed)
    }

    /// Renders the decorative form: each cell as a 3-line block showing
    /// either its value centered, or the surviving candidates arranged as a
    /// 3x3 sub-grid.
    #[must_use]
    pub fn pretty(&self) -> String {
        let rule = "-".repeat(73);
        let mut out = String::new();
        for y in 0..9 {
            out.push_str(&rule);
            out.push('\n');
            for band in 0..3 {
                for x in 0..9 {
                    out.push_str("| ");
                    let cell = self.cell(Position::new(x, y));
                    match cell.value() {
                        Some(digit) if band == 1 => {
                            let _ = write!(out, " ({digit})  ");
                        }
                        Some(_) => out.push_str("      "),
                        None => {
                            for digit in &Digit::ALL[band * 3..band * 3 + 3] {
                                if cell.candidates().contains(*digit) {
                                    let _ = write!(out, "{digit} ");
                                } else {
                                    out.push_str("  ");
                                }
                            }
                        }
                    }
                }
                out.push_str("|\n");
            }
        }
        out.push_str(&rule);
        out
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        self.cell(pos)
    }
}

/// Compact form: 9 lines of space-separated cells, `_` for unassigned.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.cell(Position::new(x, y)).value() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

/// Whitespace-tolerant parsing: blanks inside rows are stripped and empty
/// lines skipped before applying the strict 9x9 contract of
/// [`Board::from_rows`].
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|line: &String| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::House;

    const EASY: &str = "29_34____
7___9_265
5_1_2__9_
_5_91__72
4_26_7_51
9__2__6__
3_41_2___
12_____4_
____79_23";

    #[test]
    fn test_round_trip_compact_rendering() {
        let board: Board = EASY.parse().unwrap();
        let rendered = board.to_string().replace(' ', "");
        assert_eq!(rendered, EASY);

        let reparsed: Board = rendered.parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_givens_are_assigned_and_propagated() {
        let board: Board = EASY.parse().unwrap();
        assert_eq!(board[Position::new(0, 0)].value(), Some(Digit::D2));
        assert_eq!(board[Position::new(1, 0)].value(), Some(Digit::D9));
        assert_eq!(board[Position::new(2, 0)].value(), None);

        // Givens in the first row, column, and box of (2, 0) rule out their
        // digits as candidates there.
        let candidates = board[Position::new(2, 0)].candidates();
        assert!(!candidates.contains(Digit::D2));
        assert!(!candidates.contains(Digit::D9));
        assert!(!candidates.contains(Digit::D3));
        assert!(!candidates.contains(Digit::D7));
        assert!(!candidates.contains(Digit::D5));
        assert!(!candidates.contains(Digit::D1));
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let rows: Vec<&str> = EASY.lines().take(8).collect();
        let err = Board::from_rows(&rows).unwrap_err();
        assert_eq!(err, FormatError::RowCount(8).into());
    }

    #[test]
    fn test_rejects_wrong_row_length() {
        let mut rows: Vec<String> = EASY.lines().map(str::to_owned).collect();
        rows[4] = "4_26_7_5".to_owned();
        let err = Board::from_rows(&rows).unwrap_err();
        assert_eq!(err, FormatError::RowLength { row: 4, len: 8 }.into());
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        assert!(matches!(
            "_________".parse::<Board>(),
            Err(ParseBoardError::Format(FormatError::RowCount(1)))
        ));
    }

    #[test]
    fn test_rejects_conflicting_givens() {
        let mut rows = vec!["_________"; 9];
        rows[0] = "1___1____";
        assert!(matches!(
            Board::from_rows(&rows),
            Err(ParseBoardError::Contradiction(_))
        ));
    }

    #[test]
    fn test_assign_propagates_to_peers() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);
        board.assign(pos, Digit::D1).unwrap();

        assert_eq!(board[pos].value(), Some(Digit::D1));
        assert!(board[pos].candidates().is_empty());
        // Same row, column, and box lose the digit.
        assert!(!board[Position::new(5, 0)].candidates().contains(Digit::D1));
        assert!(!board[Position::new(0, 5)].candidates().contains(Digit::D1));
        assert!(!board[Position::new(1, 1)].candidates().contains(Digit::D1));
        // An unrelated cell keeps it.
        assert!(board[Position::new(4, 4)].candidates().contains(Digit::D1));
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);
        board.assign(pos, Digit::D6).unwrap();
        let before = board.clone();

        board.assign(pos, Digit::D6).unwrap();
        assert_eq!(board, before);
        // A mismatched re-assignment is also a no-op.
        board.assign(pos, Digit::D2).unwrap();
        assert_eq!(board, before);
        assert_eq!(board[pos].value(), Some(Digit::D6));
    }

    #[test]
    fn test_eliminate_absent_candidate_is_noop() {
        let mut board = Board::new();
        let pos = Position::new(7, 2);
        assert!(board.eliminate(pos, Digit::D3).unwrap());
        assert!(!board.eliminate(pos, Digit::D3).unwrap());
        assert_eq!(board[pos].candidates().len(), 8);
    }

    #[test]
    fn test_eliminate_sequence_leaves_survivors() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);
        for c in "12345898458123458945".chars() {
            let digit = Digit::from_char(c).unwrap();
            board.eliminate(pos, digit).unwrap();
        }
        assert_eq!(board[pos].value(), None);
        let candidates = board[pos].candidates();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains(Digit::D6));
        assert!(candidates.contains(Digit::D7));
    }

    #[test]
    fn test_eliminate_last_candidate_is_contradiction() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);
        for digit in &Digit::ALL[..8] {
            board.eliminate(pos, *digit).unwrap();
        }
        let err = board.eliminate(pos, Digit::D9).unwrap_err();
        assert_eq!(err, Contradiction { position: pos });
    }

    #[test]
    fn test_eliminate_assigned_value_is_contradiction() {
        let mut board = Board::new();
        let pos = Position::new(4, 4);
        board.assign(pos, Digit::D8).unwrap();
        let err = board.eliminate(pos, Digit::D8).unwrap_err();
        assert_eq!(err, Contradiction { position: pos });
        // Other digits are simply absent from an assigned cell.
        assert!(!board.eliminate(pos, Digit::D1).unwrap());
    }

    #[test]
    fn test_assign_sole() {
        let mut board = Board::new();
        let pos = Position::new(2, 6);
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                board.eliminate(pos, digit).unwrap();
            }
        }
        board.assign_sole(pos).unwrap();
        assert_eq!(board[pos].value(), Some(Digit::D5));

        // A second call on the now-assigned cell is a no-op.
        let before = board.clone();
        board.assign_sole(pos).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "does not have exactly one candidate")]
    fn test_assign_sole_requires_single_candidate() {
        let mut board = Board::new();
        let _ = board.assign_sole(Position::new(0, 0));
    }

    #[test]
    fn test_rendering_does_not_mutate() {
        let board: Board = EASY.parse().unwrap();
        let before = board.clone();
        let _ = board.to_string();
        let _ = board.pretty();
        assert_eq!(board, before);
    }

    #[test]
    fn test_pretty_layout() {
        let board: Board = EASY.parse().unwrap();
        let pretty = board.pretty();
        let lines: Vec<&str> = pretty.lines().collect();

        // 9 cell rows of 3 lines each, separated and enclosed by rules.
        assert_eq!(lines.len(), 9 * 4 + 1);
        for line in &lines {
            assert_eq!(line.chars().count(), 73);
        }
        // The given 2 at (0, 0) appears centered in the first block.
        assert!(lines[2].starts_with("|  (2)  "));
    }

    #[test]
    fn test_pretty_shows_candidates() {
        let mut board = Board::new();
        board.assign(Position::new(0, 0), Digit::D1).unwrap();
        let pretty = board.pretty();
        let lines: Vec<&str> = pretty.lines().collect();

        // (0, 0) is assigned, so its top band is blank; (1, 0) lost 1 as a
        // candidate and shows a gap in its place.
        assert!(lines[1].starts_with("|       |   2 3 "));
    }

    #[test]
    fn test_group_completeness_after_parsing() {
        let board: Board = EASY.parse().unwrap();
        for house in House::ALL {
            let mut present = crate::DigitSet::EMPTY;
            for pos in house.positions() {
                match board[pos].value() {
                    Some(digit) => {
                        present.insert(digit);
                    }
                    None => present |= board[pos].candidates(),
                }
            }
            assert_eq!(present, crate::DigitSet::FULL, "{house:?}");
        }
    }
}
