/// State of a single cell as seen by a rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// A cell position in grid space.
///
/// Signed so that a pointer outside the surface still maps to a coordinate;
/// the engine decides what an out-of-range coordinate means.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridCoord {
    pub row: i32,
    pub col: i32,
}

impl GridCoord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Top-left pixel of this cell on a surface with the given cell size
    pub fn to_pixel(self, cell_size: f32) -> (f32, f32) {
        (self.col as f32 * cell_size, self.row as f32 * cell_size)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
