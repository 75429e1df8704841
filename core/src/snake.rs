use std::collections::{HashSet, VecDeque};

use crate::types::{Cell, Direction};

/// The player-controlled snake. The body is ordered tail-to-head: the tail
/// is the front of the deque, the head is the back.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    growing: bool,
    alive: bool,
}

impl Snake {
    pub fn new(initial_body: &[Cell], direction: Direction) -> Self {
        Self {
            body: initial_body.iter().copied().collect(),
            direction,
            growing: false,
            alive: true,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Moves the head one cell in the current direction. On a normal step the
    /// tail is removed first, keeping the length constant; on a growth step
    /// the shift is skipped and the body gains exactly one cell. The growth
    /// flag applies to exactly one step. No-op once the snake is stopped.
    ///
    /// This is the only mutator of the body.
    pub fn advance(&mut self) {
        if !self.alive {
            return;
        }

        let next_head = self.head().offset(self.direction);
        if !self.growing {
            self.body.pop_front();
        }
        self.body.push_back(next_head);
        self.growing = false;
    }

    pub fn can_change_direction_to(&self, new_direction: Direction) -> bool {
        self.alive && !new_direction.is_opposite(self.direction)
    }

    /// Applies a direction-change request. A reversal into the neck segment,
    /// or any request after the snake stopped, is silently dropped.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.can_change_direction_to(new_direction) {
            self.direction = new_direction;
        }
    }

    /// Marks the next `advance` as a growth step.
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// True iff some cell appears twice in the body, i.e. the head landed on
    /// another segment after a move.
    pub fn hit_itself(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        self.body.iter().any(|cell| !seen.insert(*cell))
    }

    /// Permanently stops the snake for this round. Idempotent.
    pub fn stop(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial_body() -> Vec<Cell> {
        vec![
            Cell::new(2, 0),
            Cell::new(2, 1),
            Cell::new(2, 2),
            Cell::new(2, 3),
        ]
    }

    #[test]
    fn test_advance_shifts_body_without_length_change() {
        let mut snake = Snake::new(&initial_body(), Direction::Down);
        snake.advance();
        let body: Vec<Cell> = snake.cells().collect();
        assert_eq!(
            body,
            vec![
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(2, 3),
                Cell::new(2, 4),
            ]
        );
        assert_eq!(snake.head(), Cell::new(2, 4));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_translation_over_multiple_steps() {
        let mut snake = Snake::new(&initial_body(), Direction::Down);
        snake.advance();
        snake.set_direction(Direction::Right);
        snake.advance();
        snake.advance();
        // Head moved by (2, 1) in total, length unchanged.
        assert_eq!(snake.head(), Cell::new(4, 4));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.cells().next(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_growth_step_adds_exactly_one_cell_and_keeps_tail() {
        let mut snake = Snake::new(&initial_body(), Direction::Down);
        snake.grow();
        snake.advance();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.cells().next(), Some(Cell::new(2, 0)));
        assert_eq!(snake.head(), Cell::new(2, 4));

        // The flag applies to exactly one step.
        snake.advance();
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_reversal_is_rejected_for_every_direction() {
        let cases = [
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ];
        for (facing, reverse) in cases {
            let snake = Snake::new(&initial_body(), facing);
            assert!(!snake.can_change_direction_to(reverse));
        }
    }

    #[test]
    fn test_same_and_perpendicular_turns_are_accepted() {
        let snake = Snake::new(&initial_body(), Direction::Down);
        assert!(snake.can_change_direction_to(Direction::Down));
        assert!(snake.can_change_direction_to(Direction::Left));
        assert!(snake.can_change_direction_to(Direction::Right));
    }

    #[test]
    fn test_reversal_request_is_silently_dropped() {
        let mut snake = Snake::new(&initial_body(), Direction::Down);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_stopped_snake_ignores_moves_and_turns() {
        let mut snake = Snake::new(&initial_body(), Direction::Down);
        snake.stop();
        assert!(!snake.is_alive());
        assert!(!snake.can_change_direction_to(Direction::Left));

        snake.set_direction(Direction::Left);
        snake.advance();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert_eq!(snake.len(), 4);

        // stop is idempotent
        snake.stop();
        assert!(!snake.is_alive());
    }

    #[test]
    fn test_hit_itself_detects_duplicate_cell() {
        let overlapping = vec![
            Cell::new(2, 2),
            Cell::new(3, 2),
            Cell::new(3, 3),
            Cell::new(2, 3),
            Cell::new(2, 2),
        ];
        let snake = Snake::new(&overlapping, Direction::Up);
        assert!(snake.hit_itself());
    }

    #[test]
    fn test_hit_itself_false_without_duplicates() {
        let snake = Snake::new(&initial_body(), Direction::Down);
        assert!(!snake.hit_itself());
    }

    #[test]
    fn test_snake_actually_collides_with_itself_after_loop() {
        // Long enough body to turn back into: grow while circling.
        let body = vec![
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(7, 5),
            Cell::new(8, 5),
            Cell::new(9, 5),
        ];
        let mut snake = Snake::new(&body, Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance();
        snake.set_direction(Direction::Left);
        snake.advance();
        snake.set_direction(Direction::Up);
        snake.advance();
        // Head lands back on (8, 5), still occupied by the body.
        assert!(snake.hit_itself());
    }
}
