use rand::rngs::StdRng;
use rand::Rng;

use crate::{Board, Game, GameMode, Letter};

/// The color of a seat. Doubles as the turn identity: "whose move is it"
/// is always answered with a `Color`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Blue => write!(f, "Blue"),
            Color::Red => write!(f, "Red"),
        }
    }
}

/// How a seat's moves are decided: supplied by the caller, or picked by
/// the built-in strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Specifies which letter to place, and where.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub row: i8,
    pub col: i8,
    pub letter: Letter,
}

/// One of the two seats in a game.
///
/// Players are created once per game; the score is reset whenever a new
/// game starts, the identity persists.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub kind: PlayerKind,
    pub score: u32,
}

impl Player {
    pub fn new(kind: PlayerKind, name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            kind,
            score: 0,
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Picks the next move for a computer player.
    ///
    /// The game is only inspected, never mutated; the caller applies the
    /// returned placement through [`Game::make_move`]. Human players return
    /// `None` because their moves are supplied from outside. A computer
    /// player returns `None` only when no empty cell exists.
    pub fn decide_move(&self, game: &Game, rng: &mut StdRng) -> Option<Placement> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer => choose_computer_move(game, rng),
        }
    }
}

/// The greedy strategy, in strict priority order:
/// 1. a move that completes an S-O-S (wins in Simple, scores in General),
/// 2. in Simple mode, a move occupying a cell where the opponent could
///    complete one,
/// 3. in General mode, a scoring move (same search as 1),
/// 4. a uniformly random letter on a uniformly random empty cell.
fn choose_computer_move(game: &Game, rng: &mut StdRng) -> Option<Placement> {
    let board = game.board()?;

    if let Some(placement) = find_sos_move(board) {
        return Some(placement);
    }

    match game.mode() {
        GameMode::Simple => {
            if let Some(placement) = find_blocking_move(board) {
                return Some(placement);
            }
        }
        GameMode::General => {
            if let Some(placement) = find_sos_move(board) {
                return Some(placement);
            }
        }
    }

    let empty: Vec<(i8, i8)> = board.empty_cells().collect();
    if empty.is_empty() {
        return None;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let letter = if rng.gen::<bool>() { Letter::S } else { Letter::O };
    Some(Placement { row, col, letter })
}

/// The first placement, empty cells in row-major order and S tried before
/// O, that completes at least one S-O-S. The ordering is the fixed
/// tie-break that makes the strategy deterministic.
fn find_sos_move(board: &Board) -> Option<Placement> {
    for (row, col) in board.empty_cells() {
        for letter in [Letter::S, Letter::O] {
            if !board.sos_lines_if_placed(row, col, letter).is_empty() {
                return Some(Placement { row, col, letter });
            }
        }
    }
    None
}

/// The first cell where the opponent's next placement would complete an
/// S-O-S, to be occupied before they get there. Completing a line does not
/// depend on who places the letters, so the probe is the same as
/// [`find_sos_move`]; it is kept as its own step to mirror the strategy's
/// priority list.
fn find_blocking_move(board: &Board) -> Option<Placement> {
    for (row, col) in board.empty_cells() {
        for letter in [Letter::S, Letter::O] {
            if !board.sos_lines_if_placed(row, col, letter).is_empty() {
                return Some(Placement { row, col, letter });
            }
        }
    }
    None
}
