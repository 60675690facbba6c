/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that candidate head positions just outside the
/// playfield (x = -1, x = width) stay representable for collision checks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Logical playfield dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    /// Returns true when `cell` lies inside the playfield.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell a new snake starts on.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}
