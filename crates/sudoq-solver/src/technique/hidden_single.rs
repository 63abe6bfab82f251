use sudoq_core::{Board, Contradiction, Digit, House};

use crate::technique::Technique;

const NAME: &str = "hidden single";

/// A technique that assigns digits that can only go in one cell of a house.
///
/// A "hidden single" occurs when a digit has exactly one possible cell left
/// in a row, column, or box, even though that cell may still hold several
/// candidates. Every house/digit combination on the board is scanned per
/// application.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board) -> Result<bool, Contradiction> {
        let mut changed = false;
        for house in House::ALL {
            for digit in Digit::ALL {
                let mut holder = None;
                let mut multiple = false;
                for pos in house.positions() {
                    if board[pos].candidates().contains(digit) {
                        if holder.is_some() {
                            multiple = true;
                            break;
                        }
                        holder = Some(pos);
                    }
                }
                if let Some(pos) = holder
                    && !multiple
                {
                    board.assign(pos, digit)?;
                    changed = true;
                }
            }
        }
        Ok(changed)
    }
}
