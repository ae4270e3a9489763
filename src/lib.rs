pub mod board;
pub mod cli;
pub mod evaluate;
pub mod game;
pub mod move_generation;
pub mod searcher;
