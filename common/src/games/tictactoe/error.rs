use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    InvalidPrecondition(String),
    InvalidArgument { row: usize, col: usize },
    InvalidInput(String),
    CellOccupied(Position),
    NotYourTurn,
    GameOver,
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidPrecondition(reason) => write!(f, "Invalid precondition: {}", reason),
            TicTacToeError::InvalidArgument { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            TicTacToeError::InvalidInput(reason) => write!(f, "Invalid board: {}", reason),
            TicTacToeError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
            TicTacToeError::NotYourTurn => write!(f, "Not your turn"),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
