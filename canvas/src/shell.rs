use demineur_core::{
    Board, BoardState, CellCount, CellFace, Coord, Coord2, GameConfig, GridIndex,
    RandomFieldGenerator, Result, RevealOutcome,
};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::events::{BoardEvent, EventBus, Topic};
use crate::input::{PointerAction, PointerInput, route};
use crate::layout::{DEFAULT_CELL_PX, GridLayout};
use crate::render::BoardSurface;

/// Recognized configuration options; every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    pub rows: Coord,
    pub cols: Coord,
    pub cell_px: u32,
    /// Explicit mine count; the default density applies when absent.
    pub mines: Option<CellCount>,
    /// Explicit seed; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Keep the first-clicked cell free of mines.
    pub safe_start: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            cell_px: DEFAULT_CELL_PX,
            mines: None,
            seed: None,
            safe_start: false,
        }
    }
}

impl ShellOptions {
    fn game_config(&self) -> Result<GameConfig> {
        let size = (self.cols, self.rows);
        match self.mines {
            Some(mines) => GameConfig::new(size, mines),
            None => GameConfig::with_default_density(size),
        }
    }
}

/// Glues the board engine to the canvas: routes pointer input, repaints the
/// cells whose face changed, and publishes state changes to listeners.
pub struct BoardShell<S: BoardSurface> {
    config: GameConfig,
    board: Option<Board>,
    layout: GridLayout,
    bus: EventBus,
    surface: S,
    shown: Array2<CellFace>,
    seed: u64,
    safe_start: bool,
}

impl<S: BoardSurface> BoardShell<S> {
    /// Validates the configuration, sizes the surface, and paints the hidden
    /// board. With `safe_start` the minefield is generated on the first
    /// reveal instead of here.
    pub fn new(options: ShellOptions, surface: S) -> Result<Self> {
        let config = options.game_config()?;
        let seed = options.seed.unwrap_or_else(rand::random);
        let board = (!options.safe_start)
            .then(|| Board::generate(config, RandomFieldGenerator::new(seed)));
        Ok(Self::assemble(
            config,
            board,
            options.cell_px,
            seed,
            options.safe_start,
            surface,
        ))
    }

    /// Wraps an existing board, e.g. one built from fixed mine positions.
    pub fn from_board(board: Board, cell_px: u32, surface: S) -> Self {
        let config = board.config();
        Self::assemble(config, Some(board), cell_px, 0, false, surface)
    }

    fn assemble(
        config: GameConfig,
        board: Option<Board>,
        cell_px: u32,
        seed: u64,
        safe_start: bool,
        surface: S,
    ) -> Self {
        let layout = GridLayout::new(config.size, cell_px);
        let mut shell = Self {
            config,
            board,
            layout,
            bus: EventBus::default(),
            surface,
            shown: Array2::from_elem(config.size.idx(), CellFace::Hidden),
            seed,
            safe_start,
        };
        let (width_px, height_px) = shell.layout.surface_size();
        shell.surface.resize(width_px, height_px);
        shell.paint_all();
        shell
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> BoardState {
        self.board.as_ref().map_or(BoardState::Ready, Board::state)
    }

    pub fn mines_remaining(&self) -> i32 {
        self.board
            .as_ref()
            .map_or(i32::from(self.config.mines), |board| {
                board.mines_remaining() as i32
            })
    }

    pub fn subscribe(&mut self, topic: Topic, handler: impl FnMut(&BoardEvent) + 'static) {
        self.bus.subscribe(topic, handler);
    }

    /// Routes one pointer event; gutter hits, out-of-grid coordinates, and
    /// unmapped buttons are no-ops.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        let Some((coords, action)) = route(input, &self.layout) else {
            return;
        };
        match action {
            PointerAction::Reveal => self.reveal(coords),
            PointerAction::CycleMark => self.cycle_mark(coords),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) {
        match self.board_at(coords).reveal(coords) {
            Ok(outcome) => {
                match outcome {
                    RevealOutcome::HitMine => self.bus.emit(BoardEvent::GameLost),
                    RevealOutcome::Won => self.bus.emit(BoardEvent::GameWon),
                    _ => {}
                }
                if outcome.has_update() {
                    self.repaint_changed();
                }
            }
            Err(err) => log::trace!("Ignored reveal at {:?}: {}", coords, err),
        }
    }

    pub fn cycle_mark(&mut self, coords: Coord2) {
        match self.board_at(coords).cycle_mark(coords) {
            Ok(outcome) if outcome.has_update() => {
                let remaining = self.mines_remaining();
                self.bus.emit(BoardEvent::MinesRemainingChanged(remaining));
                self.repaint_changed();
            }
            Ok(_) => {}
            Err(err) => log::trace!("Ignored mark at {:?}: {}", coords, err),
        }
    }

    /// Replaces the board for a fresh game and repaints everything.
    pub fn new_game(&mut self, seed: Option<u64>) {
        self.seed = seed.unwrap_or_else(rand::random);
        self.board = (!self.safe_start)
            .then(|| Board::generate(self.config, RandomFieldGenerator::new(self.seed)));
        self.paint_all();
        let remaining = self.mines_remaining();
        self.bus.emit(BoardEvent::MinesRemainingChanged(remaining));
    }

    fn board_at(&mut self, start: Coord2) -> &mut Board {
        let Self {
            board,
            config,
            seed,
            safe_start,
            ..
        } = self;
        board.get_or_insert_with(|| {
            let generator = if *safe_start {
                RandomFieldGenerator::with_safe_start(*seed, start)
            } else {
                RandomFieldGenerator::new(*seed)
            };
            Board::generate(*config, generator)
        })
    }

    fn paint_all(&mut self) {
        self.surface.draw_background();
        let (cols, rows) = self.config.size;
        for col in 0..cols {
            for row in 0..rows {
                let pos = (col, row);
                let face = self
                    .board
                    .as_ref()
                    .map_or(CellFace::Hidden, |board| board.face_at(pos));
                self.shown[pos.idx()] = face;
                self.surface.draw_cell(pos, face);
            }
        }
    }

    /// Pushes exactly the cells whose face changed since the last paint.
    fn repaint_changed(&mut self) {
        let Some(board) = &self.board else {
            return;
        };
        let (cols, rows) = self.config.size;
        for col in 0..cols {
            for row in 0..rows {
                let pos = (col, row);
                let face = board.face_at(pos);
                if self.shown[pos.idx()] != face {
                    self.shown[pos.idx()] = face;
                    self.surface.draw_cell(pos, face);
                }
            }
        }
    }
}
