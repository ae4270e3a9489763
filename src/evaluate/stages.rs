//! The canonical scoring stages: reserved and open placement counting.
//!
//! Reserved placements are counted first and their cells marked, so the open
//! count that follows never double-counts them. Marks are scratch-only state
//! and are wiped by `ClearMarks` between the Home and Away passes.

use crate::board::{Board, Cell};

use super::Stage;

/// Marks `(r, c)` as already counted, if it is still empty.
fn mark(scratch: &mut Board, r: usize, c: usize) {
    if scratch.get(r, c).is_empty() {
        scratch.set(r, c, Cell::Marked);
    }
}

/// True if both cells are on the board and empty. Marked cells count as
/// occupied here, which is what excludes already-counted pairs.
fn placeable(board: &Board, r1: isize, c1: isize, r2: isize, c2: isize) -> bool {
    board.is_empty_at(r1, c1) && board.is_empty_at(r2, c2)
}

/// True if the horizontal pair at `(r, c)` is usable only by Home: both
/// cells empty, and the rows above and below are blocked at both columns so
/// Away can never claim either cell.
fn reserved_for_home(board: &Board, r: usize, c: usize) -> bool {
    let (r, c) = (r as isize, c as isize);
    if !placeable(board, r, c, r, c + 1) {
        return false;
    }

    let no_space_above = !board.is_empty_at(r - 1, c) && !board.is_empty_at(r - 1, c + 1);
    let no_space_below = !board.is_empty_at(r + 1, c) && !board.is_empty_at(r + 1, c + 1);

    no_space_above && no_space_below
}

/// The vertical mirror of [`reserved_for_home`]: both cells empty and the
/// columns to the left and right blocked at both rows.
fn reserved_for_away(board: &Board, r: usize, c: usize) -> bool {
    let (r, c) = (r as isize, c as isize);
    if !placeable(board, r, c, r + 1, c) {
        return false;
    }

    let no_space_left = !board.is_empty_at(r, c - 1) && !board.is_empty_at(r + 1, c - 1);
    let no_space_right = !board.is_empty_at(r, c + 1) && !board.is_empty_at(r + 1, c + 1);

    no_space_left && no_space_right
}

/// Counts horizontal pairs reserved for Home, marking each counted pair.
pub struct HomeReserved;

impl Stage for HomeReserved {
    fn score(&self, scratch: &mut Board) -> i16 {
        let mut count = 0;
        for r in 0..scratch.rows() {
            for c in 0..scratch.cols() {
                if reserved_for_home(scratch, r, c) {
                    count += 1;
                    mark(scratch, r, c);
                    mark(scratch, r, c + 1);
                }
            }
        }
        count
    }
}

/// Counts the remaining open horizontal placements, marking as it goes so
/// overlapping pairs are only counted once.
pub struct HomeOpen;

impl Stage for HomeOpen {
    fn score(&self, scratch: &mut Board) -> i16 {
        let mut count = 0;
        for r in 0..scratch.rows() {
            for c in 0..scratch.cols() {
                if placeable(scratch, r as isize, c as isize, r as isize, c as isize + 1) {
                    count += 1;
                    mark(scratch, r, c);
                    mark(scratch, r, c + 1);
                }
            }
        }
        count
    }
}

/// Counts vertical pairs reserved for Away. Scans column-major, along the
/// domino direction.
pub struct AwayReserved;

impl Stage for AwayReserved {
    fn score(&self, scratch: &mut Board) -> i16 {
        let mut count = 0;
        for c in 0..scratch.cols() {
            for r in 0..scratch.rows() {
                if reserved_for_away(scratch, r, c) {
                    count += 1;
                    mark(scratch, r, c);
                    mark(scratch, r + 1, c);
                }
            }
        }
        count
    }
}

/// Counts the remaining open vertical placements.
pub struct AwayOpen;

impl Stage for AwayOpen {
    fn score(&self, scratch: &mut Board) -> i16 {
        let mut count = 0;
        for c in 0..scratch.cols() {
            for r in 0..scratch.rows() {
                if placeable(scratch, r as isize, c as isize, r as isize + 1, c as isize) {
                    count += 1;
                    mark(scratch, r, c);
                    mark(scratch, r + 1, c);
                }
            }
        }
        count
    }
}

/// Housekeeping stage: reverts every mark to empty so the next side's
/// passes see the real board. Scores nothing.
pub struct ClearMarks;

impl Stage for ClearMarks {
    fn score(&self, scratch: &mut Board) -> i16 {
        for r in 0..scratch.rows() {
            for c in 0..scratch.cols() {
                if scratch.get(r, c) == Cell::Marked {
                    scratch.set(r, c, Cell::Empty);
                }
            }
        }
        0
    }
}
