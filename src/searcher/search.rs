//! Depth-limited alpha-beta search for Domineering.
//!
//! # Core algorithm
//!
//! `search_under` recurses over the placements of the side to move, keeping
//! an [alpha, beta] window of the scores each side can already guarantee.
//! Siblings that cannot move the window are pruned. At the horizon the
//! static evaluation pipeline scores the position; a position with no legal
//! reply is terminal and reported with a sentinel favoring the opponent of
//! the side to move.
//!
//! # Move ordering
//!
//! While walking a node at depth 2 the searcher scores that node's children
//! and, once every child has a score, records the full list under the
//! position's state key. Depth 2 is the first ply at which the opponent's
//! full reply set to the engine's own move is known, so those orderings are
//! exactly what a later top-level search can reuse: if its root matches a
//! recorded key, the cached ordering replaces raw expansion, front-loading
//! strong moves and improving pruning. A node whose child loop ends early
//! (a prune or a forced outcome) records nothing, since a partial list
//! consumed as a root move set would silently drop legal moves. An entry is
//! consumed at most once and removed, and unconsumed entries are evicted
//! after two searches, so a stale ordering never biases a later search.
//!
//! # Background re-sorting
//!
//! After a search returns, a background thread re-sorts every cached
//! ordering by descending score for Home and ascending for Away. The next
//! `search` call (and `drain`) joins that thread before touching the cache,
//! so the cache is never read mid-sort and never written by two overlapping
//! searches.

use std::mem;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::board::Board;
use crate::evaluate::Pipeline;
use crate::move_generation::{self, NodeList};

use super::bounds::{losing_score, AlphaBeta, NEG_INF, POS_INF};
use super::move_order_cache::MoveOrderCache;
use super::node::Node;

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    searched_position_count: usize,
    cache_hit_count: usize,
    prune_count: usize,
}

pub struct Searcher {
    evaluation: Pipeline,
    best_moves: Vec<Node>,
    cache: MoveOrderCache,
    pending_reorder: Option<JoinHandle<MoveOrderCache>>,
    pruning: bool,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// A searcher with the canonical reserved/open evaluation pipeline.
    pub fn new() -> Self {
        Self::with_pipeline(Pipeline::canonical())
    }

    pub fn with_pipeline(evaluation: Pipeline) -> Self {
        Self {
            evaluation,
            best_moves: Vec::new(),
            cache: MoveOrderCache::new(),
            pending_reorder: None,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// A searcher whose move-order cache is pre-populated from an
    /// externally supplied table of state-keyed orderings.
    pub fn with_cached_orderings<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, Vec<Node>)>,
    {
        let mut searcher = Self::new();
        searcher.cache = MoveOrderCache::from_entries(entries);
        searcher
    }

    /// Disabling pruning makes the search a plain minimax walk; the root
    /// score is identical either way, only the explored-node count differs.
    pub fn set_pruning(&mut self, pruning: bool) {
        self.pruning = pruning;
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.searched_position_count
    }

    pub fn cache_hit_count(&self) -> usize {
        self.stats.cache_hit_count
    }

    pub fn prune_count(&self) -> usize {
        self.stats.prune_count
    }

    /// Cached orderings currently held, pending entries included.
    /// Meaningless while a re-sort is in flight; call after `drain`.
    pub fn cached_ordering_count(&self) -> usize {
        self.cache.len()
    }

    /// Returns the best placement for the side to move on `board`, searched
    /// to `depth_limit` plies with heuristic evaluation beyond.
    ///
    /// The returned node is terminal (with no placement) when the side to
    /// move has already lost, and terminal (with a placement) when the move
    /// forces the game's outcome within the horizon. The caller's board is
    /// never left mutated.
    pub fn search(&mut self, board: &Board, depth_limit: u8) -> Node {
        // A re-sort from the previous call may still be running; the cache
        // must not be read or written until it lands.
        self.join_pending_reorder();

        debug!(
            "alpha-beta search to depth {} from state {:#018x}",
            depth_limit,
            board.state_hash()
        );

        self.stats = SearchStats::default();
        self.cache.begin_search();
        self.best_moves.clear();
        for depth in 0..=depth_limit {
            self.best_moves.push(Node::placeholder(board.turn(), depth));
        }

        let root = Node::root(board.turn().opposite());
        self.search_under(&root, AlphaBeta::full(), board, depth_limit);

        self.spawn_reorder();

        self.best_moves[0].clone()
    }

    /// Blocks until any in-flight cache re-sort has finished. Required
    /// before the engine is discarded or handed to another context; `search`
    /// performs the same join on entry.
    pub fn drain(&mut self) {
        self.join_pending_reorder();
    }

    fn search_under(
        &mut self,
        parent: &Node,
        mut window: AlphaBeta,
        board: &Board,
        depth_limit: u8,
    ) -> i16 {
        self.stats.searched_position_count += 1;
        let depth = parent.depth();

        // Horizon base case. A horizon position with no legal reply is
        // terminal, not merely quiet, and gets the sentinel.
        if depth >= depth_limit {
            let mut leaf = parent.clone();
            if move_generation::has_legal_placement(board) {
                leaf.set_score(self.evaluation.evaluate(board));
            } else {
                leaf.set_terminal_score(losing_score(board.turn()));
            }
            let score = leaf.score();
            self.best_moves[depth as usize] = leaf;
            return score;
        }

        let mover = board.turn();
        let state_key = board.state_hash();

        // Cached orderings are only consulted at the very top of the tree,
        // where move ordering buys the most pruning for the least
        // bookkeeping. Consumption invalidates the entry.
        let children: NodeList = if depth == 0 {
            match self.cache.consume(state_key) {
                Some(ordered) => {
                    self.stats.cache_hit_count += 1;
                    debug!("consumed cached ordering for state {:#018x}", state_key);
                    ordered
                        .into_iter()
                        .map(|mut node| {
                            node.set_depth(depth + 1);
                            node
                        })
                        .collect()
                }
                None => move_generation::expand(parent, board),
            }
        } else {
            move_generation::expand(parent, board)
        };

        // The side to move has no placement left and loses.
        if children.is_empty() {
            let mut terminal = Node::placeholder(mover, depth);
            terminal.set_terminal_score(losing_score(mover));
            let score = terminal.score();
            self.best_moves[depth as usize] = terminal;
            return score;
        }

        // One toggled copy per node; each child is applied to it and undone
        // again rather than cloning the board per child.
        let mut next_board = board.clone();
        next_board.toggle_turn();

        let mut current_best = Node::placeholder(mover, depth);
        let mut ordering: Vec<Node> = Vec::new();

        for child in children.iter() {
            tap(child, &mut next_board);
            let result = self.search_under(child, window, &next_board, depth_limit);
            untap(child, &mut next_board);

            // A forced outcome short-circuits the remaining siblings.
            if result == POS_INF || result == NEG_INF {
                current_best = child.clone();
                current_best.set_terminal_score(result);
                let score = current_best.score();
                self.best_moves[depth as usize] = current_best;
                return score;
            }

            // Buffer the ordering a later top-level search may consume.
            if depth == 2 {
                let mut scored = child.clone();
                scored.set_score(result);
                ordering.push(scored);
            }

            if current_best.is_improved_by(result) {
                current_best = child.clone();
                current_best.set_score(result);

                window.update_if_needed(result, mover);
                if self.pruning && window.can_prune(&current_best) {
                    self.stats.prune_count += 1;
                    break;
                }
            }
        }

        // Publish the ordering only when every child was scored. A pruned
        // node's partial list, consumed later as a root move set, would
        // silently drop legal moves.
        if depth == 2 && ordering.len() == children.len() {
            self.cache.insert(state_key, ordering);
        }

        let score = current_best.score();
        self.best_moves[depth as usize] = current_best;
        score
    }

    fn spawn_reorder(&mut self) {
        let mut cache = mem::take(&mut self.cache);
        self.pending_reorder = Some(thread::spawn(move || {
            cache.reorder();
            cache
        }));
    }

    fn join_pending_reorder(&mut self) {
        if let Some(handle) = self.pending_reorder.take() {
            self.cache = handle
                .join()
                .expect("move-order re-sort thread should not panic");
        }
    }
}

impl Drop for Searcher {
    fn drop(&mut self) {
        self.drain();
    }
}

/// Applies `node`'s placement to the shared board.
fn tap(node: &Node, board: &mut Board) {
    let placement = node
        .placement()
        .expect("generated node should carry a placement");
    board
        .place(&placement, node.team())
        .expect("placement should be legal in search");
}

/// Reverts [`tap`], restoring the exact prior cell contents.
fn untap(node: &Node, board: &mut Board) {
    let placement = node
        .placement()
        .expect("generated node should carry a placement");
    board
        .lift(&placement, node.team())
        .expect("placement should still be on the board in search");
}
