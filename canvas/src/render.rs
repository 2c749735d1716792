use demineur_core::{CellFace, Coord2};

/// Drawing collaborator driven by the shell. Implementations wrap the actual
/// canvas primitives; the shell only ever states what a cell now shows.
pub trait BoardSurface {
    /// Adjusts the drawing surface to the given pixel size.
    fn resize(&mut self, width_px: u32, height_px: u32);

    /// Paints the frame color; called before any cell of a fresh board.
    fn draw_background(&mut self);

    /// Draws one cell in the given visible state.
    fn draw_cell(&mut self, coords: Coord2, face: CellFace);
}
