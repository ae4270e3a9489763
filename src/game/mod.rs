//! Game orchestration on top of the search engine.

pub mod engine;

pub use engine::{Engine, EngineConfig, EngineError};
