//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "domineering",
    about = "An alpha-beta Domineering engine implemented in Rust"
)]
pub enum Domineering {
    #[structopt(
        name = "best-move",
        about = "Determine the best placement from a given position, provided as a layout with `--board` (e.g. `HH.A/...A/..../....`, required). The side to move is given with `--turn` (default: home) and the search depth with `--depth` (default: 4)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the engine play against itself at the given `--depth` (default: 4) on a `--rows` x `--cols` board (default: 8x8)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "play",
        about = "Play a game against the engine, which searches at the given `--depth` (default: 4). Your side is chosen at random unless you specify `--team`."
    )]
    Play(PlayArgs),
}

impl crate::cli::commands::Command for Domineering {
    fn execute(self) {
        match self {
            Self::BestMove(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::Play(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Domineering, structopt::clap::Error> {
        Domineering::from_iter_safe(args.iter().copied())
    }

    #[test]
    fn test_defaults_parse() {
        assert!(parse(&["domineering", "watch"]).is_ok());
        assert!(parse(&[
            "domineering",
            "best-move",
            "--board",
            "..../..../..../...."
        ])
        .is_ok());
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(parse(&[
            "domineering",
            "best-move",
            "--board",
            "..../..../..../....",
            "--depth",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn test_out_of_range_dimensions_rejected() {
        assert!(parse(&["domineering", "watch", "--rows", "0"]).is_err());
        assert!(parse(&["domineering", "play", "--cols", "40"]).is_err());
    }
}
