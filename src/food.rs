use rand::Rng;

use crate::config::{GRID_COLS, GRID_ROWS};
use crate::grid::Pos;
use crate::snake::Snake;

pub struct Food {
    position: Pos,
}

impl Food {
    /// Place the first apple, avoiding the freshly created snake.
    pub fn spawn<R: Rng>(snake: &Snake, rng: &mut R) -> Self {
        Self {
            position: random_free_cell(GRID_COLS, GRID_ROWS, |p| snake.contains(p), rng),
        }
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    /// Move the apple to a fresh cell outside the snake's current body.
    pub fn respawn<R: Rng>(&mut self, snake: &Snake, rng: &mut R) {
        self.position = random_free_cell(GRID_COLS, GRID_ROWS, |p| snake.contains(p), rng);
    }

    #[cfg(test)]
    pub fn at(position: Pos) -> Self {
        Self { position }
    }
}

/// Uniform draw over the grid, redrawing while the cell is occupied. The
/// retry loop is uncapped; the caller guarantees at least one free cell,
/// which holds for any reachable body length on this grid.
pub fn random_free_cell<R: Rng>(
    cols: i32,
    rows: i32,
    occupied: impl Fn(Pos) -> bool,
    rng: &mut R,
) -> Pos {
    loop {
        let p = Pos::new(rng.gen_range(0..cols), rng.gen_range(0..rows));
        if !occupied(p) {
            return p;
        }
    }
}
