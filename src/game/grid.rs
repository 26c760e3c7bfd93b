use rand::Rng;

/// One discrete board position, measured in whole cells from the top-left
/// corner.
///
/// Coordinates are signed so that a head that has just stepped off an edge
/// can be represented as-is until the wrap correction runs.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) col: i32,
    pub(crate) row: i32,
}

impl Cell {
    pub(crate) fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }
}

/// The square playing field: `side` cells on a side, with toroidal topology.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    side: u16,
}

impl Grid {
    pub(super) fn new(side: u16) -> Grid {
        Grid { side }
    }

    pub(super) fn side(self) -> u16 {
        self.side
    }

    /// Total number of cells on the board
    pub(super) fn cell_count(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    pub(super) fn center(self) -> Cell {
        let mid = i32::from(self.side / 2);
        Cell::new(mid, mid)
    }

    /// Map `cell` back onto the torus: a coordinate that has left the grid on
    /// one edge re-enters on the opposite edge.
    pub(super) fn wrap(self, cell: Cell) -> Cell {
        let side = i32::from(self.side);
        Cell::new(cell.col.rem_euclid(side), cell.row.rem_euclid(side))
    }

    /// Pick a cell uniformly at random
    pub(super) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        let side = i32::from(self.side);
        Cell::new(rng.random_range(0..side), rng.random_range(0..side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(2, 3), Cell::new(2, 3))]
    #[case(Cell::new(5, 2), Cell::new(0, 2))]
    #[case(Cell::new(-1, 2), Cell::new(4, 2))]
    #[case(Cell::new(2, 5), Cell::new(2, 0))]
    #[case(Cell::new(2, -1), Cell::new(2, 4))]
    #[case(Cell::new(0, 0), Cell::new(0, 0))]
    #[case(Cell::new(4, 4), Cell::new(4, 4))]
    fn wrap(#[case] before: Cell, #[case] after: Cell) {
        let grid = Grid::new(5);
        assert_eq!(grid.wrap(before), after);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 25)]
    #[case(36, 1296)]
    fn cell_count(#[case] side: u16, #[case] count: usize) {
        assert_eq!(Grid::new(side).cell_count(), count);
    }

    #[rstest]
    #[case(5, Cell::new(2, 2))]
    #[case(6, Cell::new(3, 3))]
    #[case(1, Cell::new(0, 0))]
    fn center(#[case] side: u16, #[case] cell: Cell) {
        assert_eq!(Grid::new(side).center(), cell);
    }

    #[test]
    fn random_cell_in_bounds() {
        let grid = Grid::new(5);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..100 {
            let cell = grid.random_cell(&mut rng);
            assert!((0..5).contains(&cell.col), "column out of bounds: {cell:?}");
            assert!((0..5).contains(&cell.row), "row out of bounds: {cell:?}");
        }
    }
}
