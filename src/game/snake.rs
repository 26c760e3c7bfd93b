use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;

/// The player-controlled body.
///
/// `body` is ordered head-first.  Every live segment occupies a distinct
/// cell; that invariant is re-established by the collision check after each
/// advance rather than held continuously.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) body: Vec<Cell>,
    pub(super) direction: Direction,
    pub(super) alive: bool,
    spawn: Cell,
}

impl Snake {
    /// Direction faced at spawn and after every reset
    const SPAWN_DIRECTION: Direction = Direction::Down;

    /// Create a length-one snake at the center of `grid`
    pub(super) fn new(grid: Grid) -> Snake {
        let spawn = grid.center();
        Snake {
            body: vec![spawn],
            direction: Self::SPAWN_DIRECTION,
            alive: true,
            spawn,
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.body[0]
    }

    pub(super) fn body(&self) -> &[Cell] {
        &self.body
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Slide every trailing segment into the cell of the segment ahead of it
    /// (the tail cell is vacated by the overwrite), then translate the head
    /// one cell in the current direction.  Length never changes here.
    pub(super) fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.direction.step(self.body[0]);
    }

    /// Turn toward `direction` unless it is the exact opposite of the
    /// current heading, which would fold the head back into the second
    /// segment.  A rejected turn is a silent no-op.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Wrap the head back onto the torus, then test it against the rest of
    /// the body.  Returns true (and marks the snake dead) on overlap.  A
    /// length-one snake cannot collide with itself.
    pub(super) fn check_collision(&mut self, grid: Grid) -> bool {
        self.body[0] = grid.wrap(self.body[0]);
        if self.body[1..].contains(&self.body[0]) {
            self.alive = false;
            true
        } else {
            false
        }
    }

    /// Is the snake's head on `food`?
    pub(super) fn eats(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Duplicate the head in place.  The copy becomes a real trailing
    /// segment on the next advance, growing the body by one.
    pub(super) fn grow(&mut self) {
        self.body.insert(0, self.body[0]);
    }

    /// Has the snake filled every cell on the board?
    pub(super) fn has_filled(&self, grid: Grid) -> bool {
        self.body.len() == grid.cell_count()
    }

    /// Return to the initial state: length one at the spawn cell, facing the
    /// spawn direction, alive.
    pub(super) fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.spawn);
        self.direction = Self::SPAWN_DIRECTION;
        self.alive = true;
    }
}
