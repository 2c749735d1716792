use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum BoardState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The board engine: owns the grid and runs reveal, mark cycling, and
/// win/lose detection. All operations are synchronous and run to completion
/// before returning; callers serialize access themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flag_count: CellCount,
    state: BoardState,
}

impl Board {
    /// Builds a board with mines placed by `generator` and adjacency counts
    /// computed, ready for the first reveal.
    pub fn generate(config: GameConfig, generator: impl FieldGenerator) -> Self {
        let mine_coords = generator.generate(config);
        Self::build(config.size, &mine_coords)
    }

    /// Builds a board with mines at exactly the given positions. Duplicates
    /// collapse; the mine count is taken from the grid, not the slice.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        for &(col, row) in mine_coords {
            if col >= size.0 || row >= size.1 {
                return Err(GameError::OutOfBounds);
            }
        }
        Ok(Self::build(size, mine_coords))
    }

    fn build(size: Coord2, mine_coords: &[Coord2]) -> Self {
        let mut grid: Array2<Cell> = Array2::default(size.idx());

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                log::warn!("Dropped out-of-grid mine at {:?}", pos);
                continue;
            }
            grid[pos.idx()].arm();
        }

        let mines = grid.iter().filter(|cell| cell.is_mine()).count() as CellCount;

        // adjacency is computed exactly once, after placement and before any
        // reveal
        for col in 0..size.0 {
            for row in 0..size.1 {
                let pos = (col, row);
                if grid[pos.idx()].is_mine() {
                    continue;
                }
                let count = moore_neighbors(pos, size)
                    .filter(|&neighbor| grid[neighbor.idx()].is_mine())
                    .count() as u8;
                grid[pos.idx()].set_adjacent(count);
            }
        }

        Self {
            config: GameConfig::new_unchecked(size, mines),
            grid,
            revealed_count: 0,
            flag_count: 0,
            state: BoardState::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Mines not yet flagged. Negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        (self.config.mines as isize) - (self.flag_count as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.idx()]
    }

    pub fn face_at(&self, coords: Coord2) -> CellFace {
        self.grid[coords.idx()].face()
    }

    /// Reveals a cell. Marked cells must be unmarked first; revealing a mine
    /// loses the game and uncovers every mine; revealing a zero-adjacency
    /// cell cascades over the connected zero region and its border. Stale
    /// input (finished game, already-revealed or marked cell) is a no-op.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate(coords)?;

        if self.state.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.grid[coords.idx()];
        if cell.is_revealed() || !cell.mark().is_none() {
            return Ok(RevealOutcome::NoChange);
        }

        if cell.is_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.state = BoardState::Lost;
            self.reveal_all_mines();
            return Ok(RevealOutcome::HitMine);
        }

        self.grid[coords.idx()].reveal();
        self.revealed_count += 1;
        log::debug!("Opened {:?}, adjacent mines: {}", coords, cell.adjacent());

        if cell.adjacent() == 0 {
            self.cascade(coords);
        }

        if self.revealed_count == self.config.safe_cells() {
            log::debug!("All safe cells revealed, game won");
            self.state = BoardState::Won;
            Ok(RevealOutcome::Won)
        } else {
            if matches!(self.state, BoardState::Ready) {
                self.state = BoardState::Active;
            }
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Breadth-first expansion over the zero region connected to `origin`
    /// plus its one-cell border. Visits each position at most once.
    fn cascade(&mut self, origin: Coord2) {
        let size = self.size();
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<Coord2> = moore_neighbors(origin, size).collect();
        log::trace!("Cascade from {:?}, seeds: {:?}", origin, to_visit);

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            // marked or already-revealed neighbors stay as they are; a zero
            // cell never borders a mine, so no mine is ever enqueued
            let Some(face) = self.grid[coords.idx()].reveal() else {
                log::trace!("Cascade skipped {:?}", coords);
                continue;
            };
            self.revealed_count += 1;
            log::trace!("Cascade opened {:?} as {:?}", coords, face);

            if self.grid[coords.idx()].adjacent() == 0 {
                to_visit.extend(
                    moore_neighbors(coords, size).filter(|neighbor| !visited.contains(neighbor)),
                );
            }
        }
    }

    /// Advances the flag/question mark cycle on a hidden cell and keeps the
    /// flag count in step. Stale input is a no-op.
    pub fn cycle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate(coords)?;

        if self.state.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let Some(mark) = self.grid[coords.idx()].cycle_mark() else {
            return Ok(MarkOutcome::NoChange);
        };
        match mark {
            MarkState::Flagged => self.flag_count += 1,
            MarkState::Questioned => self.flag_count -= 1,
            MarkState::None => {}
        }
        log::debug!("Marked {:?} as {:?}", coords, mark);
        Ok(MarkOutcome::Cycled(mark))
    }

    /// Uncovers every mine, flagged and questioned ones included.
    fn reveal_all_mines(&mut self) {
        for cell in self.grid.iter_mut() {
            if cell.is_mine() {
                cell.force_reveal();
            }
        }
    }

    fn validate(&self, coords: Coord2) -> Result<Coord2> {
        let (cols, rows) = self.size();
        if coords.0 < cols && coords.1 < rows {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}
