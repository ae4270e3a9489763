//! Domineering board state representation.

use super::cell::Cell;
use super::error::BoardError;
use super::placement::Placement;
use super::team::Team;
use super::zobrist::{self, MAX_DIM};

/// A rectangular Domineering board plus the side to move.
///
/// The grid is stored row-major. Boards are cheap to clone; the search makes
/// one clone per interior node and the evaluation pipeline one per leaf.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    turn: Team,
}

impl Board {
    /// Creates an empty `rows` x `cols` board with Home to move.
    ///
    /// Panics if either dimension is zero or exceeds [`MAX_DIM`].
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            (1..=MAX_DIM).contains(&rows) && (1..=MAX_DIM).contains(&cols),
            "board dimensions must be between 1 and {}, got {}x{}",
            MAX_DIM,
            rows,
            cols
        );
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            turn: Team::Home,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn set_turn(&mut self, team: Team) {
        self.turn = team;
    }

    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    pub fn get(&self, r: usize, c: usize) -> Cell {
        self.cells[self.index(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        let i = self.index(r, c);
        self.cells[i] = cell;
    }

    /// True if `(r, c)` is on the board and currently empty. Marked cells
    /// count as occupied, which is what excludes them from later scoring
    /// passes.
    pub fn is_empty_at(&self, r: isize, c: isize) -> bool {
        if r < 0 || r >= self.rows as isize || c < 0 || c >= self.cols as isize {
            return false;
        }
        self.cells[r as usize * self.cols + c as usize].is_empty()
    }

    /// True if both cells of `placement` are on the board and empty.
    pub fn is_legal(&self, placement: &Placement) -> bool {
        self.is_empty_at(placement.r1() as isize, placement.c1() as isize)
            && self.is_empty_at(placement.r2() as isize, placement.c2() as isize)
    }

    /// Writes `team`'s symbol into both cells of `placement`.
    pub fn place(&mut self, placement: &Placement, team: Team) -> Result<(), BoardError> {
        if !self.is_legal(placement) {
            return Err(BoardError::IllegalPlacement {
                placement: *placement,
            });
        }
        self.set(placement.r1(), placement.c1(), team.symbol());
        self.set(placement.r2(), placement.c2(), team.symbol());
        Ok(())
    }

    /// Reverts a previous [`place`](Self::place), restoring both cells to
    /// empty.
    pub fn lift(&mut self, placement: &Placement, team: Team) -> Result<(), BoardError> {
        let symbol = team.symbol();
        if self.get(placement.r1(), placement.c1()) != symbol
            || self.get(placement.r2(), placement.c2()) != symbol
        {
            return Err(BoardError::UnexpectedCellContents {
                placement: *placement,
            });
        }
        self.set(placement.r1(), placement.c1(), Cell::Empty);
        self.set(placement.r2(), placement.c2(), Cell::Empty);
        Ok(())
    }

    /// Zobrist hash of the cells plus the side to move, used as the
    /// move-order cache key.
    pub fn state_hash(&self) -> u64 {
        zobrist::state_hash(self)
    }

    fn index(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "cell ({},{}) out of bounds for {}x{} board",
            r,
            c,
            self.rows,
            self.cols
        );
        r * self.cols + c
    }
}
