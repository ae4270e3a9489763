//! Watch command - the engine plays both sides against itself.

use log::info;
use structopt::StructOpt;

use crate::board::Board;
use crate::game::{Engine, EngineConfig};

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4", parse(try_from_str = super::parse_depth))]
    pub depth: u8,
    #[structopt(long, default_value = "8", parse(try_from_str = super::parse_dimension))]
    pub rows: usize,
    #[structopt(long, default_value = "8", parse(try_from_str = super::parse_dimension))]
    pub cols: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: Board::new(self.rows, self.cols),
        };
        let mut engine = Engine::with_config(config);

        println!("{}", engine.board());

        loop {
            if let Some(winner) = engine.check_game_over() {
                println!("{} has no placement left; {} wins!", winner.opposite(), winner);
                break;
            }

            let mover = engine.turn();
            let best = match engine.best_placement() {
                Ok(best) => best,
                Err(err) => {
                    eprintln!("search failed: {}", err);
                    break;
                }
            };
            let placement = best
                .placement()
                .expect("a non-terminal search result carries a placement");
            info!("{} plays {} (score {})", mover, placement, best.score());

            engine
                .apply_placement(&placement)
                .expect("the engine's own placement should be legal");

            println!("{} plays {}", mover, placement);
            println!("{}", engine.board());
        }

        engine.drain();
    }
}
