use crate::*;
use alloc::vec::Vec;

pub use random::*;

mod random;

/// Picks the mine positions for a new board.
pub trait FieldGenerator {
    /// Returns exactly `config.mines` distinct in-bounds positions.
    fn generate(self, config: GameConfig) -> Vec<Coord2>;
}

/// Where mines may land relative to the first-clicked cell.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum FirstMovePolicy {
    /// Purely uniform placement; the first click can hit a mine.
    #[default]
    Anywhere,
    /// The first-clicked cell is kept clear of mines.
    SafeStart,
}
