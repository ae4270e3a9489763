use std::fmt;

use crate::board::{Placement, Team};

/// The record of one ply: which side moved, the ply depth from the search
/// root, the placement that produced this position, and the score computed
/// for it.
///
/// A node starts unscored (`is_unset`). It is scored either by recursion or
/// by the leaf evaluation, and marked terminal when it represents a position
/// from which the side to move has no legal reply.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Node {
    team: Team,
    depth: u8,
    placement: Option<Placement>,
    score: i16,
    is_unset: bool,
    is_terminal: bool,
}

impl Node {
    /// A fresh, unscored node for a concrete placement.
    pub fn new(team: Team, depth: u8, placement: Placement) -> Self {
        Self {
            team,
            depth,
            placement: Some(placement),
            score: 0,
            is_unset: true,
            is_terminal: false,
        }
    }

    /// The search root: no placement produced it. `team` is the side that
    /// (conceptually) moved last, i.e. the opponent of the side to move.
    pub fn root(team: Team) -> Self {
        Self::placeholder(team, 0)
    }

    /// An unscored slot for the best-moves table.
    pub fn placeholder(team: Team, depth: u8) -> Self {
        Self {
            team,
            depth,
            placement: None,
            score: 0,
            is_unset: true,
            is_terminal: false,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Re-tags the ply index. Used when a cached ordering from a previous
    /// search is replayed under a new root.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn score(&self) -> i16 {
        self.score
    }

    pub fn set_score(&mut self, score: i16) {
        self.score = score;
        self.is_unset = false;
    }

    /// Marks this node terminal with the given sentinel score.
    pub fn set_terminal_score(&mut self, sentinel: i16) {
        self.score = sentinel;
        self.is_unset = false;
        self.is_terminal = true;
    }

    pub fn is_unset(&self) -> bool {
        self.is_unset
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// True if `score` would replace this node as the current-depth best:
    /// any score beats an unset slot, otherwise strict improvement in the
    /// team's optimization direction (Home maximizes, Away minimizes).
    pub fn is_improved_by(&self, score: i16) -> bool {
        if self.is_unset {
            return true;
        }
        if self.team.maximize_score() {
            score > self.score
        } else {
            score < self.score
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placement {
            Some(placement) => write!(f, "{} {}", self.team, placement),
            None => write!(f, "{} (no placement)", self.team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::bounds::{NEG_INF, POS_INF};

    #[test]
    fn test_new_node_is_unset() {
        let node = Node::new(Team::Home, 1, Placement::horizontal(0, 0));
        assert!(node.is_unset());
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_set_score_clears_unset() {
        let mut node = Node::new(Team::Home, 1, Placement::horizontal(0, 0));
        node.set_score(3);
        assert!(!node.is_unset());
        assert_eq!(node.score(), 3);
    }

    #[test]
    fn test_terminal_sentinels() {
        let mut node = Node::placeholder(Team::Away, 0);
        node.set_terminal_score(POS_INF);
        assert!(node.is_terminal());
        assert_eq!(node.score(), POS_INF);

        let mut node = Node::placeholder(Team::Home, 0);
        node.set_terminal_score(NEG_INF);
        assert!(node.is_terminal());
        assert_eq!(node.score(), NEG_INF);
    }

    #[test]
    fn test_improvement_direction_per_team() {
        let mut home = Node::new(Team::Home, 1, Placement::horizontal(0, 0));
        home.set_score(2);
        assert!(home.is_improved_by(3));
        assert!(!home.is_improved_by(2));
        assert!(!home.is_improved_by(1));

        let mut away = Node::new(Team::Away, 1, Placement::vertical(0, 0));
        away.set_score(2);
        assert!(away.is_improved_by(1));
        assert!(!away.is_improved_by(2));
        assert!(!away.is_improved_by(3));
    }

    #[test]
    fn test_unset_slot_always_improved() {
        let node = Node::placeholder(Team::Away, 0);
        assert!(node.is_improved_by(NEG_INF));
        assert!(node.is_improved_by(POS_INF));
    }
}
