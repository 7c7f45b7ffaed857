use crate::grid::{to_index, CellIndex, CELLS, PLAYFIELD_TOP, WIDTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// What each grid cell currently shows.
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Board { cells: [Cell::Empty; CELLS] }
    }

    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index as usize]
    }

    pub fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index as usize] = cell;
    }

    /// Empties every row below the status line.
    pub fn clear_playfield(&mut self) {
        let start = to_index(0, PLAYFIELD_TOP) as usize;
        for cell in &mut self.cells[start..] {
            *cell = Cell::Empty;
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Playfield cells with their index, row by row.
    pub fn playfield(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        let start = WIDTH as usize * PLAYFIELD_TOP as usize;
        self.cells[start..].iter().enumerate().map(move |(i, c)| ((start + i) as CellIndex, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_leaves_status_row() {
        let mut board = Board::new();
        board.set(to_index(3, 0), Cell::Food);
        board.set(to_index(3, 1), Cell::Snake);
        board.set(to_index(39, 24), Cell::Food);

        board.clear_playfield();

        assert_eq!(board.get(to_index(3, 0)), Cell::Food);
        assert_eq!(board.get(to_index(3, 1)), Cell::Empty);
        assert_eq!(board.get(to_index(39, 24)), Cell::Empty);
    }

    #[test]
    fn playfield_skips_status_row() {
        let board = Board::new();
        let cells: Vec<_> = board.playfield().collect();
        assert_eq!(cells.len(), CELLS - WIDTH as usize);
        assert_eq!(cells[0].0, to_index(0, 1));
    }
}
