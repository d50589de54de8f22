use crate::{Board, Letter};

/// A randomly filled board together with an empty cell to probe.
#[derive(Clone, Debug)]
pub struct ProbeInput {
    pub board: Board,
    pub row: i8,
    pub col: i8,
    pub letter: Letter,
}

impl quickcheck::Arbitrary for ProbeInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = 3 + (u8::arbitrary(g) % 8) as i8;
        let mut board = Board::new(size).unwrap();

        // The probed cell stays empty, everything else is filled at random
        let probe_row = (u8::arbitrary(g) % size as u8) as i8;
        let probe_col = (u8::arbitrary(g) % size as u8) as i8;
        for row in 0..size {
            for col in 0..size {
                if (row, col) == (probe_row, probe_col) {
                    continue;
                }
                if bool::arbitrary(g) {
                    board.place_letter(row, col, Letter::arbitrary(g)).unwrap();
                }
            }
        }

        ProbeInput {
            board,
            row: probe_row,
            col: probe_col,
            letter: Letter::arbitrary(g),
        }
    }
}

impl quickcheck::Arbitrary for Letter {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Letter::S, Letter::O]).unwrap()
    }
}
