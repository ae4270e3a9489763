use once_cell::sync::Lazy;
use rand::Rng;

use super::cell::Cell;
use super::team::Team;
use super::Board;

// Zobrist board hashing
// * One number for each team symbol at each cell ( 2 * 32 * 32 )
// * One number to indicate the side to move is Away
//
// The state hash for a position is the xor of the numbers for every occupied
// cell, xor'd with the side-to-move number when Away is on turn. Equal
// positions with the same side to move therefore map to equal keys, which is
// what the move-order cache requires.

/// Largest supported board edge. Bounds the zobrist table.
pub const MAX_DIM: usize = 32;

const NUM_COUNT: usize = MAX_DIM * MAX_DIM * 2 + 1;
const AWAY_TO_MOVE_NUM: usize = NUM_COUNT - 1;

static ZOBRIST: Lazy<Zobrist> = Lazy::new(Zobrist::new);

pub struct Zobrist {
    numbers: Vec<u64>,
}

impl Zobrist {
    fn new() -> Self {
        let mut rng = rand::thread_rng();
        let numbers = (0..NUM_COUNT).map(|_| rng.gen()).collect();
        Self { numbers }
    }

    pub fn hash(&self, board: &Board) -> u64 {
        let mut state_hash = 0;

        for r in 0..board.rows() {
            for c in 0..board.cols() {
                let team = match board.get(r, c) {
                    Cell::Home => Team::Home,
                    Cell::Away => Team::Away,
                    _ => continue,
                };
                state_hash ^= self.cell_num(team, r, c);
            }
        }

        if board.turn() == Team::Away {
            state_hash ^= self.numbers[AWAY_TO_MOVE_NUM];
        }

        state_hash
    }

    fn cell_num(&self, team: Team, r: usize, c: usize) -> u64 {
        self.numbers[(r * MAX_DIM + c) * 2 + team as usize]
    }
}

pub fn state_hash(board: &Board) -> u64 {
    ZOBRIST.hash(board)
}
