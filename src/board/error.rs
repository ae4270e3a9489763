use thiserror::Error;

use super::placement::Placement;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("cannot place a domino on {placement}, a target cell is occupied or out of bounds")]
    IllegalPlacement { placement: Placement },
    #[error("cannot lift a domino from {placement}, the cells do not hold the expected symbol")]
    UnexpectedCellContents { placement: Placement },
}
