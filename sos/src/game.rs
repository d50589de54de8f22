use std::cmp::Ordering;

use crate::{
    Board, Color, IllegalMove, IllegalPlacement, InvalidBoardSize, Letter, Player, PlayerKind,
    SosLine,
};

/// Which rule set the game is played under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// The first completed S-O-S wins immediately.
    Simple,
    /// Every completed S-O-S scores a point and grants another turn; the
    /// higher score wins once the board is full.
    General,
}

/// The result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Blue,
    Red,
    Draw,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::Blue => Winner::Blue,
            Color::Red => Winner::Red,
        }
    }
}

/// A game of SOS between the two seats.
///
/// The board is owned exclusively by the game and only ever mutated through
/// [`Game::make_move`]. The mode is fixed for the lifetime of the game; the
/// board size can be changed and takes effect at the next
/// [`Game::start_new_game`].
#[derive(Clone, Debug)]
pub struct Game {
    mode: GameMode,
    board_size: i8,
    // None until the first start_new_game
    board: Option<Board>,
    blue: Player,
    red: Player,
    current: Color,
    over: bool,
    winner: Option<Winner>,
}

impl Game {
    /// Creates a game in the given mode, with two human seats named after
    /// their colors. Use [`Game::set_players`] to change the seats.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board_size: 3,
            board: None,
            blue: Player::new(PlayerKind::Human, "Blue", Color::Blue),
            red: Player::new(PlayerKind::Human, "Red", Color::Red),
            current: Color::Blue,
            over: false,
            winner: None,
        }
    }

    /// Sets the size of the board created by the next
    /// [`Game::start_new_game`].
    pub fn set_board_size(&mut self, size: i8) -> Result<(), InvalidBoardSize> {
        if !Board::is_valid_size(size) {
            return Err(InvalidBoardSize { size });
        }
        self.board_size = size;
        Ok(())
    }

    /// Assigns the two seats.
    pub fn set_players(&mut self, blue: Player, red: Player) {
        self.blue = blue;
        self.red = red;
    }

    /// Starts a fresh game: new empty board, both scores reset, Blue to
    /// move. May also be called to restart after a finished game.
    pub fn start_new_game(&mut self) {
        // board_size is kept valid by set_board_size
        self.board = Some(Board::new(self.board_size).expect("board size was validated"));
        self.blue.reset_score();
        self.red.reset_score();
        self.current = Color::Blue;
        self.over = false;
        self.winner = None;
    }

    /// Plays one move for the current player: places the letter, detects
    /// newly completed S-O-S lines, applies the mode's scoring and
    /// termination policy, and advances the turn.
    ///
    /// Returns the completed lines (possibly none) so the caller can
    /// highlight them. On error, nothing has been mutated.
    pub fn make_move(
        &mut self,
        row: i8,
        col: i8,
        letter: Letter,
    ) -> Result<Vec<SosLine>, IllegalMove> {
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return Err(IllegalMove::NotStarted),
        };
        if self.over {
            return Err(IllegalMove::GameOver);
        }
        // The board rechecks this below; rejecting here as well keeps the
        // game layer's contract independent of the board's
        if !board.is_cell_empty(row, col) {
            let err = if board.is_in_bounds(row, col) {
                IllegalPlacement::CellOccupied { row, col }
            } else {
                IllegalPlacement::OutOfBounds { row, col }
            };
            return Err(IllegalMove::Placement { err });
        }

        board
            .place_letter(row, col, letter)
            .map_err(|err| IllegalMove::Placement { err })?;
        let lines = board.sos_lines_at(row, col);

        self.handle_sos_found(&lines);
        self.check_game_over();
        if !self.over {
            self.handle_turn_switch(!lines.is_empty());
        }
        Ok(lines)
    }

    fn handle_sos_found(&mut self, lines: &[SosLine]) {
        if lines.is_empty() {
            return;
        }
        match self.mode {
            GameMode::Simple => {
                self.winner = Some(Winner::from(self.current));
                self.over = true;
            }
            GameMode::General => {
                // One point per reported line, including double counts
                let points = lines.len() as u32;
                self.current_player_mut().add_score(points);
            }
        }
    }

    fn check_game_over(&mut self) {
        let full = match &self.board {
            Some(board) => board.is_full(),
            None => return,
        };
        match self.mode {
            GameMode::Simple => {
                if !self.over && full {
                    self.over = true;
                    self.winner = Some(Winner::Draw);
                }
            }
            GameMode::General => {
                if full {
                    self.over = true;
                    self.winner = Some(match self.blue.score.cmp(&self.red.score) {
                        Ordering::Greater => Winner::Blue,
                        Ordering::Less => Winner::Red,
                        Ordering::Equal => Winner::Draw,
                    });
                }
            }
        }
    }

    fn handle_turn_switch(&mut self, sos_found: bool) {
        match self.mode {
            GameMode::Simple => self.switch_turn(),
            // Completing a line keeps the turn
            GameMode::General => {
                if !sos_found {
                    self.switch_turn();
                }
            }
        }
    }

    fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }

    fn current_player_mut(&mut self) -> &mut Player {
        match self.current {
            Color::Blue => &mut self.blue,
            Color::Red => &mut self.red,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board_size(&self) -> i8 {
        self.board_size
    }

    /// The board, or `None` before the first [`Game::start_new_game`].
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    pub fn blue_player(&self) -> &Player {
        &self.blue
    }

    pub fn red_player(&self) -> &Player {
        &self.red
    }
}
