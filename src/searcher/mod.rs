//! The alpha-beta search engine and its supporting types.

pub mod bounds;
pub mod move_order_cache;
pub mod node;
pub mod search;


pub use bounds::{AlphaBeta, NEG_INF, POS_INF};
pub use move_order_cache::MoveOrderCache;
pub use node::Node;
pub use search::Searcher;
