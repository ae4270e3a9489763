use thiserror::Error;

use crate::board::{Board, BoardError, Placement, Team};
use crate::move_generation;
use crate::searcher::{Node, Searcher};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 4,
            starting_position: Board::new(8, 8),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("the game is over, {winner} has won")]
    GameOver { winner: Team },
    #[error("illegal placement: {error}")]
    IllegalPlacement { error: BoardError },
}

/// The main engine: owns the board and the searcher, applies placements for
/// either side, and reports the game result.
pub struct Engine {
    board: Board,
    searcher: Searcher,
    search_depth: u8,
    last_score: Option<i16>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            searcher: Searcher::new(),
            search_depth: config.search_depth,
            last_score: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Team {
        self.board.turn()
    }

    pub fn last_score(&self) -> Option<i16> {
        self.last_score
    }

    /// Returns the winner if the side to move has no legal placement.
    pub fn check_game_over(&self) -> Option<Team> {
        if move_generation::has_legal_placement(&self.board) {
            None
        } else {
            Some(self.board.turn().opposite())
        }
    }

    /// Searches for the best placement for the side to move.
    pub fn best_placement(&mut self) -> Result<Node, EngineError> {
        if let Some(winner) = self.check_game_over() {
            return Err(EngineError::GameOver { winner });
        }

        let best = self.searcher.search(&self.board, self.search_depth);
        self.last_score = Some(best.score());
        Ok(best)
    }

    /// Applies a placement for the side to move and passes the turn.
    pub fn apply_placement(&mut self, placement: &Placement) -> Result<(), EngineError> {
        let team = self.board.turn();
        self.board
            .place(placement, team)
            .map_err(|error| EngineError::IllegalPlacement { error })?;
        self.board.toggle_turn();
        Ok(())
    }

    /// Blocks until any background cache maintenance has finished.
    pub fn drain(&mut self) {
        self.searcher.drain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn engine_on(board: Board, depth: u8) -> Engine {
        Engine::with_config(EngineConfig {
            search_depth: depth,
            starting_position: board,
        })
    }

    #[test]
    fn test_game_over_detection() {
        let engine = engine_on(Board::from_str("HH").unwrap(), 2);
        // Home to move with no legal placement: Away has won.
        assert_eq!(engine.check_game_over(), Some(Team::Away));

        let engine = engine_on(Board::new(4, 4), 2);
        assert_eq!(engine.check_game_over(), None);
    }

    #[test]
    fn test_best_placement_errors_when_game_over() {
        let mut engine = engine_on(Board::new(1, 1), 2);
        assert!(matches!(
            engine.best_placement(),
            Err(EngineError::GameOver { winner: Team::Away })
        ));
    }

    #[test]
    fn test_apply_placement_toggles_turn() {
        let mut engine = engine_on(Board::new(4, 4), 2);
        engine.apply_placement(&Placement::horizontal(0, 0)).unwrap();
        assert_eq!(engine.turn(), Team::Away);
    }

    #[test]
    fn test_apply_illegal_placement_is_rejected() {
        let mut engine = engine_on(Board::new(4, 4), 2);
        engine.apply_placement(&Placement::horizontal(0, 0)).unwrap();
        let result = engine.apply_placement(&Placement::vertical(0, 0));
        assert!(matches!(result, Err(EngineError::IllegalPlacement { .. })));
        // The failed placement must not have consumed the turn.
        assert_eq!(engine.turn(), Team::Away);
    }

    #[test]
    fn test_self_play_runs_to_completion() {
        let mut engine = engine_on(Board::new(4, 4), 2);
        let mut plies = 0;

        while engine.check_game_over().is_none() {
            let best = engine.best_placement().unwrap();
            engine
                .apply_placement(&best.placement().unwrap())
                .unwrap();
            plies += 1;
            assert!(plies <= 16, "4x4 game cannot exceed 8 dominoes");
        }

        assert!(engine.check_game_over().is_some());
        assert!(plies >= 4, "a 4x4 game lasts at least a few plies");
    }

    #[test]
    fn test_last_score_is_recorded() {
        let mut engine = engine_on(Board::new(4, 4), 2);
        assert_eq!(engine.last_score(), None);
        let best = engine.best_placement().unwrap();
        assert_eq!(engine.last_score(), Some(best.score()));
    }
}
