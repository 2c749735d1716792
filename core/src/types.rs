/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional `(col, row)` coordinates.
pub type Coord2 = (Coord, Coord);

/// Converts a position into an `ndarray` index.
pub trait GridIndex {
    fn idx(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn idx(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const MOORE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the in-bounds Moore neighborhood of `center` on a grid of size
/// `bounds`. Positions outside the grid are excluded, never wrapped.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    MOORE_OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let col = center.0.checked_add_signed(dx)?;
        let row = center.1.checked_add_signed(dy)?;
        (col < bounds.0 && row < bounds.1).then_some((col, row))
    })
}
