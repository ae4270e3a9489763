//! Legal-placement enumeration for the side to move.

use smallvec::SmallVec;

use crate::board::{Board, Placement};
use crate::searcher::node::Node;

/// Inline capacity covers every position on boards up to 6x6; larger boards
/// spill to the heap.
pub type NodeList = SmallVec<[Node; 32]>;

/// Enumerates every legal placement for the side to move on `board`,
/// row-major by the placement's first cell, producing one unscored child
/// node per placement at `parent.depth() + 1`.
///
/// This raw order is the fallback when no cached ordering exists for the
/// position.
pub fn expand(parent: &Node, board: &Board) -> NodeList {
    let mover = board.turn();
    let depth = parent.depth() + 1;
    let mut children = NodeList::new();

    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let placement = Placement::for_team(mover, r, c);
            if board.is_legal(&placement) {
                children.push(Node::new(mover, depth, placement));
            }
        }
    }

    children
}

/// True if the side to move has at least one legal placement.
pub fn has_legal_placement(board: &Board) -> bool {
    let mover = board.turn();
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            if board.is_legal(&Placement::for_team(mover, r, c)) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Team;
    use std::str::FromStr;

    #[test]
    fn test_expand_empty_board_home() {
        let board = Board::new(2, 2);
        let root = Node::root(Team::Away);
        let children = expand(&root, &board);

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].placement(), Some(Placement::horizontal(0, 0)));
        assert_eq!(children[1].placement(), Some(Placement::horizontal(1, 0)));
        assert!(children.iter().all(|n| n.team() == Team::Home));
        assert!(children.iter().all(|n| n.depth() == 1));
        assert!(children.iter().all(|n| n.is_unset()));
    }

    #[test]
    fn test_expand_empty_board_away() {
        let mut board = Board::new(2, 2);
        board.set_turn(Team::Away);
        let root = Node::root(Team::Home);
        let children = expand(&root, &board);

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].placement(), Some(Placement::vertical(0, 0)));
        assert_eq!(children[1].placement(), Some(Placement::vertical(0, 1)));
    }

    #[test]
    fn test_expand_skips_occupied_cells() {
        let board = Board::from_str("HH../..../..../....").unwrap();
        let root = Node::root(Team::Away);
        let children = expand(&root, &board);

        // Row 0 only has one placement left, rows 1-3 have three each.
        assert_eq!(children.len(), 1 + 3 * 3);
        assert_eq!(children[0].placement(), Some(Placement::horizontal(0, 2)));
    }

    #[test]
    fn test_expand_row_major_order() {
        let board = Board::new(3, 3);
        let root = Node::root(Team::Away);
        let children = expand(&root, &board);

        let anchors: Vec<(usize, usize)> = children
            .iter()
            .map(|n| {
                let p = n.placement().unwrap();
                (p.r1(), p.c1())
            })
            .collect();
        assert_eq!(
            anchors,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_has_legal_placement() {
        let mut board = Board::from_str("HH").unwrap();
        assert!(!has_legal_placement(&board));

        board.set_turn(Team::Away);
        assert!(!has_legal_placement(&board));

        let board = Board::from_str("..").unwrap();
        assert!(has_legal_placement(&board));
    }
}
