use crate::board::Team;

use super::node::Node;

/// Sentinel scores. They bound every real evaluation (which stays within a
/// few multiples of the cell count) and double as terminal-result markers.
pub const NEG_INF: i16 = i16::MIN / 2;
pub const POS_INF: i16 = i16::MAX / 2;

/// The sentinel reported when `loser` is to move and has no legal placement.
pub fn losing_score(loser: Team) -> i16 {
    match loser {
        Team::Home => NEG_INF,
        Team::Away => POS_INF,
    }
}

/// The alpha-beta window: the best score Home can already guarantee and the
/// best score Away can already guarantee on the current search path.
///
/// The window is `Copy` and handed down by value, so tightening inside a
/// subtree never propagates back to its siblings' ancestors.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBeta {
    pub alpha: i16,
    pub beta: i16,
}

impl AlphaBeta {
    pub fn full() -> Self {
        Self {
            alpha: NEG_INF,
            beta: POS_INF,
        }
    }

    /// Tightens alpha (Home, strictly greater) or beta (Away, strictly
    /// less) with a freshly backed-up value.
    pub fn update_if_needed(&mut self, value: i16, team: Team) {
        match team {
            Team::Home => {
                if value > self.alpha {
                    self.alpha = value;
                }
            }
            Team::Away => {
                if value < self.beta {
                    self.beta = value;
                }
            }
        }
    }

    /// The classic cutoff test, applied to the current node's tentative
    /// best rather than the raw child value. An unset best never prunes.
    pub fn can_prune(&self, node: &Node) -> bool {
        if node.is_unset() {
            return false;
        }
        match node.team() {
            Team::Home => node.score() >= self.beta,
            Team::Away => node.score() <= self.alpha,
        }
    }
}
