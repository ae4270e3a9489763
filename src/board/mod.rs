//! Board state for Domineering: the grid, the two teams, placements, and
//! the zobrist state hash used by the move-order cache.

#[allow(clippy::module_inception)]
mod board;
pub mod cell;
mod display;
pub mod error;
pub mod layout;
pub mod placement;
pub mod team;
mod zobrist;

pub use board::Board;
pub use cell::Cell;
pub use error::BoardError;
pub use placement::Placement;
pub use team::Team;
pub use zobrist::MAX_DIM;
