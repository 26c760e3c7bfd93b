use super::grid::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Translate `cell` one step in this direction.  No wrapping happens
    /// here; the edge correction is the collision check's job.
    pub(super) fn step(self, cell: Cell) -> Cell {
        match self {
            Direction::Up => Cell::new(cell.col, cell.row - 1),
            Direction::Down => Cell::new(cell.col, cell.row + 1),
            Direction::Left => Cell::new(cell.col - 1, cell.row),
            Direction::Right => Cell::new(cell.col + 1, cell.row),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
