use super::error::TicTacToeError;
use super::types::{BOARD_SIZE, Cell, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Builds a board from untyped rows, rejecting anything that is not 3x3.
    pub fn from_grid(grid: &[Vec<Cell>]) -> Result<Self, TicTacToeError> {
        if grid.len() != BOARD_SIZE {
            return Err(TicTacToeError::InvalidInput(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                grid.len()
            )));
        }

        let mut board = Self::new();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(TicTacToeError::InvalidInput(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            board.cells[row].copy_from_slice(cells);
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), TicTacToeError> {
        if !self.is_empty_at(pos) {
            return Err(TicTacToeError::CellOccupied(pos));
        }
        self.set(pos, player.cell());
        Ok(())
    }

    /// Unchecked write used by the search for place/undo pairs.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }
}

/// Empty cells in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    Position::all().filter(|&pos| board.is_empty_at(pos)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const H: Cell = Cell::Human;
    const C: Cell = Cell::Computer;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), 9);
        assert!(!board.is_full());
        assert_eq!(get_available_moves(&board).len(), 9);
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();
        assert!(board.place(pos(1, 2), Player::Human).is_ok());
        assert_eq!(board.get(pos(1, 2)), Cell::Human);
        assert_eq!(board.count(Cell::Human), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(pos(0, 0), Player::Computer).unwrap();
        assert_eq!(
            board.place(pos(0, 0), Player::Human),
            Err(TicTacToeError::CellOccupied(pos(0, 0)))
        );
        assert_eq!(board.get(pos(0, 0)), Cell::Computer);
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut board = Board::from_rows([[H, C, H], [C, H, C], [C, H, C]]);
        assert!(board.is_full());
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_rows([[H, E, C], [E, H, E], [C, E, E]]);
        let moves = get_available_moves(&board);
        assert_eq!(moves, vec![pos(0, 1), pos(1, 0), pos(1, 2), pos(2, 1), pos(2, 2)]);
    }

    #[test]
    fn test_from_grid_accepts_three_by_three() {
        let grid = vec![vec![H, E, E], vec![E, C, E], vec![E, E, E]];
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(board.get(pos(0, 0)), Cell::Human);
        assert_eq!(board.get(pos(1, 1)), Cell::Computer);
    }

    #[test]
    fn test_from_grid_rejects_wrong_row_count() {
        let grid = vec![vec![E, E, E], vec![E, E, E]];
        assert!(matches!(Board::from_grid(&grid), Err(TicTacToeError::InvalidInput(_))));
    }

    #[test]
    fn test_from_grid_rejects_ragged_row() {
        let grid = vec![vec![E, E, E], vec![E, E, E, E], vec![E, E, E]];
        assert!(matches!(Board::from_grid(&grid), Err(TicTacToeError::InvalidInput(_))));
    }
}
