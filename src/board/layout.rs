//! Board layout parsing, analogous to FEN for chess.
//!
//! A layout is one string per row, rows joined by `/`, using `.` for empty,
//! `H` for Home and `A` for Away, e.g. `HH.A/...A/..../....`. The side to
//! move is not part of the layout and is set separately.

use std::str::FromStr;

use thiserror::Error;

use super::cell::Cell;
use super::zobrist::MAX_DIM;
use super::Board;

#[derive(Error, Debug)]
pub enum LayoutParseError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("invalid cell symbol {symbol:?}; options are: '.', 'H', 'A'")]
    InvalidSymbol { symbol: char },
    #[error("layout is {rows}x{cols}, the maximum supported size is {max}x{max}", max = MAX_DIM)]
    TooLarge { rows: usize, cols: usize },
}

impl FromStr for Board {
    type Err = LayoutParseError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let row_strs: Vec<&str> = layout.split('/').collect();
        let cols = row_strs.first().map_or(0, |row| row.chars().count());
        if cols == 0 {
            return Err(LayoutParseError::Empty);
        }

        let rows = row_strs.len();
        if rows > MAX_DIM || cols > MAX_DIM {
            return Err(LayoutParseError::TooLarge { rows, cols });
        }

        let mut board = Board::new(rows, cols);
        for (r, row_str) in row_strs.iter().enumerate() {
            let len = row_str.chars().count();
            if len != cols {
                return Err(LayoutParseError::RaggedRow {
                    row: r,
                    len,
                    expected: cols,
                });
            }
            for (c, symbol) in row_str.chars().enumerate() {
                let cell = Cell::from_char(symbol)
                    .ok_or(LayoutParseError::InvalidSymbol { symbol })?;
                board.set(r, c, cell);
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Team;

    #[test]
    fn test_parse_empty_board() {
        let board = Board::from_str("..../..../..../....").unwrap();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board, Board::new(4, 4));
    }

    #[test]
    fn test_parse_occupied_cells() {
        let board = Board::from_str("HH./..A/..A").unwrap();
        assert_eq!(board.get(0, 0), Cell::Home);
        assert_eq!(board.get(0, 1), Cell::Home);
        assert_eq!(board.get(1, 2), Cell::Away);
        assert_eq!(board.get(2, 2), Cell::Away);
        assert!(board.get(1, 0).is_empty());
    }

    #[test]
    fn test_parse_preserves_default_turn() {
        let board = Board::from_str("../..").unwrap();
        assert_eq!(board.turn(), Team::Home);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(
            Board::from_str("..../.."),
            Err(LayoutParseError::RaggedRow { .. })
        ));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        assert!(matches!(
            Board::from_str(".x/.."),
            Err(LayoutParseError::InvalidSymbol { symbol: 'x' })
        ));
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert!(matches!(Board::from_str(""), Err(LayoutParseError::Empty)));
    }

    #[test]
    fn test_display_round_trip() {
        let layout = "HH.A/...A/AA../.HH.";
        let board = Board::from_str(layout).unwrap();
        assert_eq!(board.to_layout(), layout);
    }
}
