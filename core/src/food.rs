use std::collections::HashSet;

use crate::grid::Grid;
use crate::log;
use crate::rng::SessionRng;
use crate::types::Cell;

/// The single consumable target. One live instance per round, repositioned
/// in place whenever the snake eats it.
#[derive(Clone, Debug)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn spawn(rng: &mut SessionRng, grid: &Grid, occupied: &HashSet<Cell>) -> Self {
        let position = sample_free_cell(rng, grid, occupied);
        log!("Food spawned at ({}, {})", position.col, position.row);
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_hit(&self, snake_head: Cell) -> bool {
        self.position == snake_head
    }

    /// Resamples the position uniformly over the grid, excluding every
    /// occupied cell (the whole snake body).
    pub fn respawn(&mut self, rng: &mut SessionRng, grid: &Grid, occupied: &HashSet<Cell>) {
        self.position = sample_free_cell(rng, grid, occupied);
        log!("Food respawned at ({}, {})", self.position.col, self.position.row);
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Cell) {
        self.position = position;
    }
}

// Retries until a free cell comes up. A fully occupied grid would loop
// forever, but the grid is far larger than any reachable snake length;
// spinning here is an unreached state, not a crash path.
fn sample_free_cell(rng: &mut SessionRng, grid: &Grid, occupied: &HashSet<Cell>) -> Cell {
    loop {
        let cell = rng.random_cell(grid);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
