//! Static evaluation, invoked only at the search horizon.
//!
//! The evaluation is an ordered pipeline of (stage, weight) pairs. Each
//! stage scores the position and may mark cells on a private scratch copy of
//! the board so that later stages skip what it already counted; the ordering
//! is semantic, because later passes depend on earlier marks. Reserved
//! placements outscore open ones since the opponent can never interfere with
//! them.

use crate::board::Board;

pub mod stages;

use stages::{AwayOpen, AwayReserved, ClearMarks, HomeOpen, HomeReserved};

pub const HOME_RESERVED_WEIGHT: i16 = 2;
pub const HOME_OPEN_WEIGHT: i16 = 1;
pub const AWAY_RESERVED_WEIGHT: i16 = -2;
pub const AWAY_OPEN_WEIGHT: i16 = -1;

/// One scoring pass. Stages may mark cells on the scratch board; marks are
/// invisible outside the pipeline's own evaluation.
pub trait Stage: Send + Sync {
    fn score(&self, scratch: &mut Board) -> i16;
}

/// A weight applied to a stage's raw count. Receives the real (unmarked)
/// position, so position-dependent weighting is possible.
pub type WeightFn = fn(&Board) -> i16;

/// The ordered evaluation pipeline. Stages can be added or removed without
/// the searcher noticing.
pub struct Pipeline {
    stages: Vec<(Box<dyn Stage>, WeightFn)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The canonical reserved/open weighting: +2/+1 for Home, -2/-1 for
    /// Away, with a mark-clearing pass between the two sides.
    pub fn canonical() -> Self {
        let mut pipeline = Self::new();
        pipeline.push(HomeReserved, |_| HOME_RESERVED_WEIGHT);
        pipeline.push(HomeOpen, |_| HOME_OPEN_WEIGHT);
        pipeline.push(ClearMarks, |_| 0);
        pipeline.push(AwayReserved, |_| AWAY_RESERVED_WEIGHT);
        pipeline.push(AwayOpen, |_| AWAY_OPEN_WEIGHT);
        pipeline.push(ClearMarks, |_| 0);
        pipeline
    }

    pub fn push<S: Stage + 'static>(&mut self, stage: S, weight: WeightFn) {
        self.stages.push((Box::new(stage), weight));
    }

    /// Weighted sum of all stages, run in order against a scratch copy of
    /// `board`. The caller's board is never touched.
    pub fn evaluate(&self, board: &Board) -> i16 {
        let mut scratch = board.clone();
        let mut total = 0;
        for (stage, weight) in &self.stages {
            total += weight(board) * stage.score(&mut scratch);
        }
        total
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_board_is_balanced() {
        let pipeline = Pipeline::canonical();
        assert_eq!(pipeline.evaluate(&Board::new(4, 4)), 0);
    }

    #[test]
    fn test_reserved_pair_outscores_open() {
        // One Home-reserved pair and nothing for Away.
        let board = Board::from_str("HH/../HH").unwrap();
        assert_eq!(Pipeline::canonical().evaluate(&board), HOME_RESERVED_WEIGHT);
    }

    #[test]
    fn test_away_reserved_scores_negative() {
        let board = Board::from_str("A.A/A.A").unwrap();
        assert_eq!(Pipeline::canonical().evaluate(&board), AWAY_RESERVED_WEIGHT);
    }

    #[test]
    fn test_evaluate_does_not_mutate_position() {
        let board = Board::from_str("HH.A/...A/..../....").unwrap();
        let copy = board.clone();
        Pipeline::canonical().evaluate(&board);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let board = Board::from_str("HH.A/...A/..../....").unwrap();
        let pipeline = Pipeline::canonical();
        assert_eq!(pipeline.evaluate(&board), pipeline.evaluate(&board));
    }

    #[test]
    fn test_custom_stage_registration() {
        struct CellCount;
        impl Stage for CellCount {
            fn score(&self, scratch: &mut Board) -> i16 {
                (scratch.rows() * scratch.cols()) as i16
            }
        }

        let mut pipeline = Pipeline::new();
        pipeline.push(CellCount, |_| 3);
        assert_eq!(pipeline.evaluate(&Board::new(2, 2)), 12);
    }

    #[test]
    fn test_single_row_is_fully_reserved_for_home() {
        // Both pairs on a 1x4 row are flanked above and below by the board
        // edge, so the whole row is reserved for Home: 2 * 2 = 4. The open
        // pass finds nothing because the reserved pass marked every cell.
        let board = Board::new(1, 4);
        assert_eq!(Pipeline::canonical().evaluate(&board), 4);
    }
}
