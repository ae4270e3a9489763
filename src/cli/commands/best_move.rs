//! Best move command - determine the best placement from a position.

use structopt::StructOpt;

use crate::board::{Board, Team};
use crate::game::{Engine, EngineConfig};
use crate::searcher::POS_INF;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4", parse(try_from_str = super::parse_depth))]
    pub depth: u8,
    #[structopt(long = "board")]
    pub starting_position: Board,
    #[structopt(long, default_value = "home")]
    pub turn: Team,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut starting_position = self.starting_position;
        starting_position.set_turn(self.turn);

        let config = EngineConfig {
            search_depth: self.depth,
            starting_position,
        };
        let mut engine = Engine::with_config(config);

        match engine.best_placement() {
            Ok(best) => {
                let placement = best
                    .placement()
                    .expect("a non-terminal search result carries a placement");
                println!("{}", placement);
                if best.is_terminal() {
                    let winner = if best.score() == POS_INF {
                        Team::Home
                    } else {
                        Team::Away
                    };
                    println!("forced win for {}", winner);
                } else {
                    println!("score: {}", best.score());
                }
            }
            Err(err) => eprintln!("Failed to calculate best placement: {}", err),
        }

        engine.drain();
    }
}
