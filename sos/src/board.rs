use crate::{IllegalPlacement, InvalidBoardSize};

/// A letter that can be placed on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Letter {
    S,
    O,
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Letter::S => write!(f, "S"),
            Letter::O => write!(f, "O"),
        }
    }
}

/// One completed S-O-S line.
///
/// The coordinates go from the start of the line to its end, along the
/// positive sense of the line's axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SosLine {
    pub cells: [(i8, i8); 3],
}

/// The four axes along which an S-O-S can lie. Each one implicitly covers
/// both its positive and its negative sense.
const AXES: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// A square grid of cells that each hold a [`Letter`] or nothing.
///
/// Rows and columns are 0-indexed. The size is fixed at construction and
/// always within 3..=10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: i8,
    cells: Vec<Option<Letter>>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: i8) -> Result<Self, InvalidBoardSize> {
        if !Self::is_valid_size(size) {
            return Err(InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
        })
    }

    pub fn is_valid_size(size: i8) -> bool {
        (3..=10).contains(&size)
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    pub fn is_in_bounds(&self, row: i8, col: i8) -> bool {
        (0..self.size).contains(&row) && (0..self.size).contains(&col)
    }

    /// The letter at the given cell.
    ///
    /// Returns `None` for empty cells, and also for out-of-bounds
    /// coordinates, so that lookups never fail.
    pub fn letter_at(&self, row: i8, col: i8) -> Option<Letter> {
        if !self.is_in_bounds(row, col) {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// Whether the cell is empty. Out-of-bounds cells count as not empty.
    pub fn is_cell_empty(&self, row: i8, col: i8) -> bool {
        self.is_in_bounds(row, col) && self.letter_at(row, col).is_none()
    }

    /// Puts a letter into an empty cell.
    ///
    /// On failure, nothing is mutated; on success, exactly that one cell
    /// transitions from empty to `letter`.
    pub fn place_letter(
        &mut self,
        row: i8,
        col: i8,
        letter: Letter,
    ) -> Result<(), IllegalPlacement> {
        if !self.is_in_bounds(row, col) {
            return Err(IllegalPlacement::OutOfBounds { row, col });
        }
        if self.letter_at(row, col).is_some() {
            return Err(IllegalPlacement::CellOccupied { row, col });
        }
        let index = self.index(row, col);
        self.cells[index] = Some(letter);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Empties every cell without changing the size.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// All empty cells, in row-major order.
    ///
    /// The computer strategy relies on this ordering being deterministic.
    pub fn empty_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.letter_at(row, col).is_none())
    }

    /// All S-O-S lines running through the given cell.
    ///
    /// Only lines through the most recently placed cell can be newly
    /// completed, so running this once per placement finds every new line
    /// in a constant number of probes instead of a full board scan.
    ///
    /// A single cell can complete up to 8 lines (two senses per axis for an
    /// S, one centered line per axis for an O). Lines are reported once per
    /// qualifying scanning pass and are deliberately not deduplicated; the
    /// resulting count is what General mode scores.
    pub fn sos_lines_at(&self, row: i8, col: i8) -> Vec<SosLine> {
        let mut lines = Vec::new();
        let placed = match self.letter_at(row, col) {
            Some(letter) => letter,
            None => return lines,
        };
        for (dr, dc) in AXES {
            match placed {
                Letter::S => {
                    // Forward: the cell starts the line
                    if self.letter_at(row + dr, col + dc) == Some(Letter::O)
                        && self.letter_at(row + 2 * dr, col + 2 * dc) == Some(Letter::S)
                    {
                        lines.push(SosLine {
                            cells: [
                                (row, col),
                                (row + dr, col + dc),
                                (row + 2 * dr, col + 2 * dc),
                            ],
                        });
                    }
                    // Backward: the cell ends the line
                    if self.letter_at(row - dr, col - dc) == Some(Letter::O)
                        && self.letter_at(row - 2 * dr, col - 2 * dc) == Some(Letter::S)
                    {
                        lines.push(SosLine {
                            cells: [
                                (row - 2 * dr, col - 2 * dc),
                                (row - dr, col - dc),
                                (row, col),
                            ],
                        });
                    }
                }
                Letter::O => {
                    // The cell is always the center of the line
                    if self.letter_at(row - dr, col - dc) == Some(Letter::S)
                        && self.letter_at(row + dr, col + dc) == Some(Letter::S)
                    {
                        lines.push(SosLine {
                            cells: [(row - dr, col - dc), (row, col), (row + dr, col + dc)],
                        });
                    }
                }
            }
        }
        lines
    }

    /// The lines that placing `letter` into the given empty cell would
    /// complete, without mutating the board.
    pub fn sos_lines_if_placed(&self, row: i8, col: i8, letter: Letter) -> Vec<SosLine> {
        if !self.is_cell_empty(row, col) {
            return Vec::new();
        }
        let mut probed = self.clone();
        let index = probed.index(row, col);
        probed.cells[index] = Some(letter);
        probed.sos_lines_at(row, col)
    }

    fn index(&self, row: i8, col: i8) -> usize {
        row as usize * self.size as usize + col as usize
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.letter_at(row, col) {
                    Some(letter) => write!(f, "{}", letter)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ProbeInput;

    quickcheck! {
        fn detection_is_idempotent(input: ProbeInput) -> bool {
            let mut board = input.board;
            board.place_letter(input.row, input.col, input.letter).unwrap();
            board.sos_lines_at(input.row, input.col) == board.sos_lines_at(input.row, input.col)
        }

        fn probing_does_not_mutate(input: ProbeInput) -> bool {
            let board = input.board;
            let snapshot = board.clone();
            let probed_lines = board.sos_lines_if_placed(input.row, input.col, input.letter);

            let mut placed = board.clone();
            placed.place_letter(input.row, input.col, input.letter).unwrap();
            let placed_lines = placed.sos_lines_at(input.row, input.col);

            board == snapshot && probed_lines == placed_lines
        }
    }

    fn board_with(size: i8, letters: &[(i8, i8, Letter)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, letter) in letters {
            board.place_letter(row, col, letter).unwrap();
        }
        board
    }

    #[test]
    fn valid_sizes() {
        for size in 3..=10 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.empty_cells().count(), size as usize * size as usize);
        }
    }

    #[test]
    fn invalid_sizes() {
        for size in [-1, 0, 1, 2, 11, 12, i8::MAX] {
            assert_eq!(Board::new(size), Err(InvalidBoardSize { size }));
        }
    }

    #[test]
    fn place_and_look_up() {
        let mut board = Board::new(3).unwrap();
        assert!(board.is_cell_empty(1, 2));
        board.place_letter(1, 2, Letter::O).unwrap();
        assert_eq!(board.letter_at(1, 2), Some(Letter::O));
        assert!(!board.is_cell_empty(1, 2));
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut board = board_with(3, &[(0, 0, Letter::S)]);
        assert_eq!(
            board.place_letter(0, 0, Letter::O),
            Err(IllegalPlacement::CellOccupied { row: 0, col: 0 })
        );
        // The failed placement changed nothing
        assert_eq!(board.letter_at(0, 0), Some(Letter::S));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.place_letter(3, 0, Letter::S),
            Err(IllegalPlacement::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            board.place_letter(0, -1, Letter::S),
            Err(IllegalPlacement::OutOfBounds { row: 0, col: -1 })
        );
        assert!(!board.is_cell_empty(-1, 0));
        assert_eq!(board.letter_at(3, 3), None);
    }

    #[test]
    fn full_board_detection() {
        let mut board = Board::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert!(!board.is_full());
                board.place_letter(row, col, Letter::S).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn reset_empties_the_grid() {
        let mut board = board_with(4, &[(0, 0, Letter::S), (3, 3, Letter::O)]);
        board.reset();
        assert_eq!(board, Board::new(4).unwrap());
    }

    #[test]
    fn horizontal_sos() {
        let board = board_with(3, &[(0, 0, Letter::S), (0, 1, Letter::O), (0, 2, Letter::S)]);
        assert_eq!(
            board.sos_lines_at(0, 2),
            vec![SosLine {
                cells: [(0, 0), (0, 1), (0, 2)]
            }]
        );
    }

    #[test]
    fn vertical_sos() {
        let board = board_with(3, &[(0, 1, Letter::S), (1, 1, Letter::O), (2, 1, Letter::S)]);
        assert_eq!(
            board.sos_lines_at(0, 1),
            vec![SosLine {
                cells: [(0, 1), (1, 1), (2, 1)]
            }]
        );
    }

    #[test]
    fn diagonal_sos() {
        let board = board_with(3, &[(0, 0, Letter::S), (1, 1, Letter::O), (2, 2, Letter::S)]);
        assert_eq!(
            board.sos_lines_at(1, 1),
            vec![SosLine {
                cells: [(0, 0), (1, 1), (2, 2)]
            }]
        );
    }

    #[test]
    fn anti_diagonal_sos() {
        let board = board_with(3, &[(0, 2, Letter::S), (1, 1, Letter::O), (2, 0, Letter::S)]);
        assert_eq!(
            board.sos_lines_at(2, 0),
            vec![SosLine {
                cells: [(0, 2), (1, 1), (2, 0)]
            }]
        );
    }

    #[test]
    fn no_sos_in_sss_or_ooo() {
        let board = board_with(
            3,
            &[
                (0, 0, Letter::S),
                (0, 1, Letter::S),
                (0, 2, Letter::S),
                (1, 0, Letter::O),
                (1, 1, Letter::O),
                (1, 2, Letter::O),
            ],
        );
        for col in 0..3 {
            assert!(board.sos_lines_at(0, col).is_empty());
            assert!(board.sos_lines_at(1, col).is_empty());
        }
    }

    #[test]
    fn empty_cell_has_no_lines() {
        let board = board_with(3, &[(0, 0, Letter::S), (0, 1, Letter::O)]);
        assert!(board.sos_lines_at(0, 2).is_empty());
        assert!(board.sos_lines_at(5, 5).is_empty());
    }

    // The two S..S skeletons share the center, so the single O completes
    // both diagonals at once.
    #[test]
    fn two_lines_through_one_cell() {
        let board = board_with(
            5,
            &[
                (0, 0, Letter::S),
                (2, 2, Letter::S),
                (0, 2, Letter::S),
                (2, 0, Letter::S),
                (1, 1, Letter::O),
            ],
        );
        assert_eq!(
            board.sos_lines_at(1, 1),
            vec![
                SosLine {
                    cells: [(0, 0), (1, 1), (2, 2)]
                },
                SosLine {
                    cells: [(0, 2), (1, 1), (2, 0)]
                },
            ]
        );
    }

    // An S in the middle of a star of O-S rays completes a forward and a
    // backward line on every axis.
    #[test]
    fn eight_lines_through_one_cell() {
        let mut letters = Vec::new();
        for (dr, dc) in [
            (0, 1),
            (0, -1),
            (1, 0),
            (-1, 0),
            (1, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
        ] {
            letters.push((2 + dr, 2 + dc, Letter::O));
            letters.push((2 + 2 * dr, 2 + 2 * dc, Letter::S));
        }
        letters.push((2, 2, Letter::S));
        let board = board_with(5, &letters);
        assert_eq!(board.sos_lines_at(2, 2).len(), 8);
    }

    #[test]
    fn probing_an_occupied_cell_finds_nothing() {
        let board = board_with(3, &[(0, 0, Letter::S), (0, 1, Letter::O), (0, 2, Letter::S)]);
        assert!(board.sos_lines_if_placed(0, 2, Letter::S).is_empty());
        assert!(board.sos_lines_if_placed(-1, 0, Letter::S).is_empty());
    }

    #[test]
    fn render_to_text() {
        let board = board_with(3, &[(0, 0, Letter::S), (1, 1, Letter::O)]);
        assert_eq!(board.to_string(), "S . .\n. O .\n. . .\n");
    }
}
