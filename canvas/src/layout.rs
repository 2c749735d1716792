use demineur_core::{Coord, Coord2};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_PX: u32 = 28;

/// Pixel geometry of the board: square cells separated and framed by a
/// gutter of roughly a sixth of the cell size.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    size: Coord2,
    cell_px: u32,
    gutter_px: u32,
}

impl GridLayout {
    pub fn new(size: Coord2, cell_px: u32) -> Self {
        Self {
            size,
            cell_px,
            gutter_px: (cell_px + 3) / 6,
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn cell_px(&self) -> u32 {
        self.cell_px
    }

    const fn pitch(&self) -> u32 {
        self.cell_px + self.gutter_px
    }

    /// Full surface size in pixels, gutter frame included.
    pub fn surface_size(&self) -> (u32, u32) {
        let (cols, rows) = self.size;
        (
            self.gutter_px + u32::from(cols) * self.pitch(),
            self.gutter_px + u32::from(rows) * self.pitch(),
        )
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, (col, row): Coord2) -> (u32, u32) {
        (
            self.gutter_px + u32::from(col) * self.pitch(),
            self.gutter_px + u32::from(row) * self.pitch(),
        )
    }

    /// Maps offset-corrected pixel coordinates to a grid position. Gutter
    /// hits and out-of-grid coordinates yield `None`.
    pub fn position_at(&self, x_px: i32, y_px: i32) -> Option<Coord2> {
        let col = self.axis_index(x_px, self.size.0)?;
        let row = self.axis_index(y_px, self.size.1)?;
        Some((col, row))
    }

    fn axis_index(&self, px: i32, count: Coord) -> Option<Coord> {
        let rel = u32::try_from(px).ok()?.checked_sub(self.gutter_px)?;
        if rel % self.pitch() >= self.cell_px {
            return None;
        }
        let index = rel / self.pitch();
        (index < u32::from(count)).then(|| index as Coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new((10, 10), DEFAULT_CELL_PX)
    }

    #[test]
    fn surface_size_counts_cells_and_gutters() {
        // 5px gutter frame plus ten 33px pitches per axis
        assert_eq!(layout().surface_size(), (335, 335));
    }

    #[test]
    fn cell_interiors_map_to_their_position() {
        let layout = layout();
        assert_eq!(layout.position_at(5, 5), Some((0, 0)));
        assert_eq!(layout.position_at(32, 32), Some((0, 0)));
        assert_eq!(layout.position_at(38, 71), Some((1, 2)));
        assert_eq!(layout.position_at(302, 302), Some((9, 9)));
    }

    #[test]
    fn gutter_hits_are_rejected() {
        let layout = layout();
        assert_eq!(layout.position_at(4, 10), None);
        assert_eq!(layout.position_at(33, 10), None);
        assert_eq!(layout.position_at(10, 330), None);
    }

    #[test]
    fn out_of_grid_coordinates_are_rejected() {
        let layout = layout();
        assert_eq!(layout.position_at(-3, 10), None);
        assert_eq!(layout.position_at(10, 400), None);
        assert_eq!(layout.position_at(400, 10), None);
    }

    #[test]
    fn origin_and_position_round_trip() {
        let layout = layout();
        let (x, y) = layout.cell_origin((7, 3));
        assert_eq!(layout.position_at(x as i32, y as i32), Some((7, 3)));
    }
}
