use domineering::cli::commands::Command;
use domineering::cli::Domineering;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Domineering::from_args().execute();
}
