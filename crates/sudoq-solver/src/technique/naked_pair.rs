use sudoq_core::{Board, Contradiction, DigitSet, House, Position};
use tinyvec::ArrayVec;

use crate::technique::Technique;

const NAME: &str = "naked pair";

/// A technique that removes candidates using naked pairs within a house.
///
/// A "naked pair" occurs when two cells of a house hold the same 2-element
/// candidate set. Those two digits must land in those two cells, so they are
/// eliminated from every other cell of the house. The rule generalizes to
/// larger tuples, but only pairs are implemented.
///
/// A third cell sharing the same pair would be stripped of both candidates
/// and surfaces as a [`Contradiction`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedPair
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, board: &mut Board) -> Result<bool, Contradiction> {
        let mut changed = false;
        for house in House::ALL {
            let mut pairs: ArrayVec<[(Position, DigitSet); 9]> = ArrayVec::new();
            for pos in house.positions() {
                let candidates = board[pos].candidates();
                if candidates.len() == 2 {
                    pairs.push((pos, candidates));
                }
            }
            for (i, &(pos1, digits)) in pairs.iter().enumerate() {
                for &(pos2, other_digits) in &pairs[i + 1..] {
                    if other_digits != digits {
                        continue;
                    }
                    for pos in house.positions() {
                        if pos == pos1 || pos == pos2 {
                            continue;
                        }
                        for digit in digits {
                            changed |= board.eliminate(pos, digit)?;
                        }
                    }
                }
            }
        }
        Ok(changed)
    }
}
