use serde::{Deserialize, Serialize};

/// Flag/question annotation on a hidden cell, independent of its kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkState {
    #[default]
    None,
    Flagged,
    Questioned,
}

impl MarkState {
    /// `None -> Flagged -> Questioned -> None`.
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Flagged,
            Self::Flagged => Self::Questioned,
            Self::Questioned => Self::None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Mine,
}

/// Player-visible projection of a cell, also the vocabulary the renderer
/// draws with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFace {
    Hidden,
    Flagged,
    Questioned,
    Blank,
    Count(u8),
    Mine,
}

/// One grid position. Kind and adjacency are fixed after board construction;
/// reveal/mark operations only move the visible state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    adjacent: u8,
    revealed: bool,
    mark: MarkState,
}

impl Cell {
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn adjacent(self) -> u8 {
        self.adjacent
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn mark(self) -> MarkState {
        self.mark
    }

    pub(crate) fn arm(&mut self) {
        self.kind = CellKind::Mine;
        self.adjacent = 0;
    }

    pub(crate) fn set_adjacent(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.adjacent = count;
    }

    /// Reveals the cell and returns the now-visible face. A cell that is
    /// already revealed, or still carries a mark, stays as it is.
    pub fn reveal(&mut self) -> Option<CellFace> {
        if self.revealed || !self.mark.is_none() {
            return None;
        }
        self.revealed = true;
        Some(self.face())
    }

    /// Terminal reveal used when the game is lost: marks do not block it.
    pub(crate) fn force_reveal(&mut self) {
        self.revealed = true;
    }

    /// Advances the mark 3-cycle and returns the new mark. Revealed cells
    /// cannot be marked.
    pub fn cycle_mark(&mut self) -> Option<MarkState> {
        if self.revealed {
            return None;
        }
        self.mark = self.mark.next();
        Some(self.mark)
    }

    pub fn face(self) -> CellFace {
        if self.revealed {
            return match self.kind {
                CellKind::Mine => CellFace::Mine,
                CellKind::Empty if self.adjacent == 0 => CellFace::Blank,
                CellKind::Empty => CellFace::Count(self.adjacent),
            };
        }
        match self.mark {
            MarkState::None => CellFace::Hidden,
            MarkState::Flagged => CellFace::Flagged,
            MarkState::Questioned => CellFace::Questioned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cycle_returns_to_none_after_three_steps() {
        let mut cell = Cell::default();
        assert_eq!(cell.cycle_mark(), Some(MarkState::Flagged));
        assert_eq!(cell.cycle_mark(), Some(MarkState::Questioned));
        assert_eq!(cell.cycle_mark(), Some(MarkState::None));
        assert_eq!(cell.face(), CellFace::Hidden);
    }

    #[test]
    fn marks_do_not_touch_kind_or_adjacency() {
        let mut cell = Cell::default();
        cell.set_adjacent(3);
        for _ in 0..6 {
            cell.cycle_mark();
        }
        assert_eq!(cell.kind(), CellKind::Empty);
        assert_eq!(cell.adjacent(), 3);
    }

    #[test]
    fn marked_cell_cannot_be_revealed() {
        let mut cell = Cell::default();
        cell.cycle_mark();
        assert_eq!(cell.reveal(), None);
        assert_eq!(cell.face(), CellFace::Flagged);
    }

    #[test]
    fn reveal_is_a_noop_on_revealed_cells() {
        let mut cell = Cell::default();
        cell.set_adjacent(2);
        assert_eq!(cell.reveal(), Some(CellFace::Count(2)));
        assert_eq!(cell.reveal(), None);
    }

    #[test]
    fn revealed_cell_cannot_be_marked() {
        let mut cell = Cell::default();
        cell.reveal();
        assert_eq!(cell.cycle_mark(), None);
    }

    #[test]
    fn force_reveal_shows_a_flagged_mine() {
        let mut cell = Cell::default();
        cell.arm();
        cell.cycle_mark();
        cell.force_reveal();
        assert_eq!(cell.face(), CellFace::Mine);
    }
}
