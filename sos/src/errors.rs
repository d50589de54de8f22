/// The error type for [`Board::new`](crate::Board::new) and
/// [`Game::set_board_size`](crate::Game::set_board_size).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize {
    pub size: i8,
}

impl std::error::Error for InvalidBoardSize {}

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board size must be between 3 and 10, but {} was requested",
            self.size
        )
    }
}

/// The error type for [`Board::place_letter`](crate::Board::place_letter),
/// i.e. for putting a single letter on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { row: i8, col: i8 },
    CellOccupied { row: i8, col: i8 },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { row, col } => write!(
                f,
                "Cell ({}, {}) is outside the bounds of the board",
                row, col
            ),
            IllegalPlacement::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The error type for one move.
pub enum IllegalMove {
    NotStarted,
    GameOver,
    Placement { err: IllegalPlacement },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Placement { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotStarted => write!(f, "The game has not been started"),
            IllegalMove::GameOver => write!(f, "The game is already over"),
            IllegalMove::Placement { err } => write!(f, "Cannot place the letter: {}", err),
        }
    }
}
