use crate::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {cols}x{rows} board with {mines} mines")]
    InvalidConfig {
        cols: Coord,
        rows: Coord,
        mines: CellCount,
    },
    #[error("Position outside the grid")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
