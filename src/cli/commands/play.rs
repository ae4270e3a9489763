//! Play command - a human plays one side against the engine.

use std::io::{self, Write};

use structopt::StructOpt;

use crate::board::{Board, Placement, Team};
use crate::game::{Engine, EngineConfig};

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4", parse(try_from_str = super::parse_depth))]
    pub depth: u8,
    #[structopt(long, default_value = "8", parse(try_from_str = super::parse_dimension))]
    pub rows: usize,
    #[structopt(long, default_value = "8", parse(try_from_str = super::parse_dimension))]
    pub cols: usize,
    #[structopt(long, default_value = "random")]
    pub team: Team,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: Board::new(self.rows, self.cols),
        };
        let mut engine = Engine::with_config(config);
        let human = self.team;

        println!(
            "You are {} and place {}.",
            human,
            match human {
                Team::Home => "horizontally",
                Team::Away => "vertically",
            }
        );
        println!("{}", engine.board());

        loop {
            if let Some(winner) = engine.check_game_over() {
                if winner == human {
                    println!("{} has no placement left. You win!", winner.opposite());
                } else {
                    println!("You have no placement left. {} wins.", winner);
                }
                break;
            }

            if engine.turn() == human {
                let placement = match prompt_placement(human) {
                    Some(placement) => placement,
                    None => {
                        println!("goodbye");
                        break;
                    }
                };
                if let Err(err) = engine.apply_placement(&placement) {
                    println!("{}", err);
                    continue;
                }
            } else {
                let best = engine
                    .best_placement()
                    .expect("search should succeed while the game is on");
                let placement = best
                    .placement()
                    .expect("a non-terminal search result carries a placement");
                engine
                    .apply_placement(&placement)
                    .expect("the engine's own placement should be legal");
                println!("{} plays {}", human.opposite(), placement);
            }

            println!("{}", engine.board());
        }

        engine.drain();
    }
}

/// Reads the anchor cell of the human's placement from stdin. Returns None
/// on end of input or "quit".
fn prompt_placement(team: Team) -> Option<Placement> {
    loop {
        print!("enter placement as `row col` (anchor cell), or `quit`: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => return None,
            Ok(_) => (),
            Err(error) => {
                println!("error: {}", error);
                continue;
            }
        }

        let input = input.trim();
        if input == "quit" {
            return None;
        }

        let mut parts = input.split_whitespace();
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(c), None) => r.parse::<usize>().ok().zip(c.parse::<usize>().ok()),
            _ => None,
        };

        match parsed {
            Some((r, c)) => return Some(Placement::for_team(team, r, c)),
            None => println!("could not parse `{}`; expected two numbers", input),
        }
    }
}
