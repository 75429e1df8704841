use serde::{Deserialize, Serialize};

/// One discrete grid position. Signed so that out-of-bounds positions
/// (e.g. column -1 after a move into the wall) stay representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn offset(self, direction: Direction) -> Cell {
        let (dc, dr) = direction.delta();
        Cell::new(self.col + dc, self.row + dr)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (column, row) delta of a one-cell step. Row grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_moves_one_cell() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.offset(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.offset(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.offset(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.offset(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_is_opposite_only_for_reversals() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Up));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Left.is_opposite(Direction::Down));
    }
}
