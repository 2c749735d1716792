#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// One mine per this many cells when no explicit count is configured.
pub const DEFAULT_MINE_DENSITY: CellCount = 7;

pub const DEFAULT_SIZE: Coord2 = (10, 10);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates instead of clamping: a zero dimension or a mine count
    /// outside `(0, cols*rows)` fails construction.
    pub fn new((cols, rows): Coord2, mines: CellCount) -> Result<Self> {
        let total = mult(cols, rows);
        if cols == 0 || rows == 0 || mines == 0 || mines >= total {
            return Err(GameError::InvalidConfig { cols, rows, mines });
        }
        Ok(Self::new_unchecked((cols, rows), mines))
    }

    /// One mine per [`DEFAULT_MINE_DENSITY`] cells, rounded up.
    pub fn with_default_density(size: Coord2) -> Result<Self> {
        let total = mult(size.0, size.1);
        Self::new(size, total.div_ceil(DEFAULT_MINE_DENSITY))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let total = mult(DEFAULT_SIZE.0, DEFAULT_SIZE.1);
        Self::new_unchecked(DEFAULT_SIZE, total.div_ceil(DEFAULT_MINE_DENSITY))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Cycled(MarkState),
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cycled(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new((0, 10), 5),
            Err(GameError::InvalidConfig {
                cols: 0,
                rows: 10,
                mines: 5
            })
        );
    }

    #[test]
    fn config_rejects_mine_counts_outside_the_open_range() {
        assert!(GameConfig::new((3, 3), 0).is_err());
        assert!(GameConfig::new((3, 3), 9).is_err());
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((3, 3), 1).is_ok());
    }

    #[test]
    fn default_config_uses_the_one_in_seven_density() {
        let config = GameConfig::default();
        assert_eq!(config.size, (10, 10));
        assert_eq!(config.mines, 15);
        assert_eq!(config.safe_cells(), 85);
    }

    #[test]
    fn default_density_rounds_up() {
        let config = GameConfig::with_default_density((4, 2)).unwrap();
        assert_eq!(config.mines, 2);
    }
}
