use crate::types::Cell;

/// The fixed play-field, measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Derives the cell extent from a pixel screen size and a pixel cell size.
    pub fn from_pixels(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        Self {
            width: (screen_width / cell_size) as i32,
            height: (screen_height / cell_size) as i32,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.width && cell.row >= 0 && cell.row < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_derives_cell_extent() {
        let grid = Grid::from_pixels(625, 625, 25);
        assert_eq!(grid.width, 25);
        assert_eq!(grid.height, 25);
        assert_eq!(grid.cell_count(), 625);
    }

    #[test]
    fn test_contains_inside() {
        let grid = Grid::new(25, 25);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(24, 24)));
        assert!(grid.contains(Cell::new(12, 7)));
    }

    #[test]
    fn test_contains_rejects_every_boundary_overrun() {
        let grid = Grid::new(25, 25);
        assert!(!grid.contains(Cell::new(-1, 10)));
        assert!(!grid.contains(Cell::new(25, 10)));
        assert!(!grid.contains(Cell::new(10, -1)));
        assert!(!grid.contains(Cell::new(10, 25)));
    }
}
