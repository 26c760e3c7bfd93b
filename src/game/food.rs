use super::grid::{Cell, Grid};
use super::snake::Snake;
use rand::Rng;

/// The single piece of food on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Cell,
}

impl Food {
    /// Place the first food on a cell the snake does not occupy
    pub(super) fn new<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Food {
        let mut food = Food { pos: snake.head() };
        food.respawn(rng, grid, snake);
        food
    }

    pub(super) fn pos(&self) -> Cell {
        self.pos
    }

    /// Move the food to a fresh cell by rejection sampling.  The entire body
    /// is excluded, so the food can never land under the snake.  A free cell
    /// always exists, so the loop terminates: the board is at least 2×2 by
    /// configuration, the snake has length one at construction and after a
    /// win reset, and the win check runs before any other respawn.
    pub(super) fn respawn<R: Rng>(&mut self, rng: &mut R, grid: Grid, snake: &Snake) {
        loop {
            let pos = grid.random_cell(rng);
            if !snake.body().contains(&pos) {
                self.pos = pos;
                break;
            }
        }
    }
}
