mod args;
mod commands;
mod core;
mod error;
mod utils;

use args::{args, Arguments, ArgumentsParser};
pub use error::{Error, Result};
use log::error;

fn main() {
    let args = ArgumentsParser::parse(&args().get_matches());

    init_log(args.verbosity);

    if let Err(error) = run(args) {
        error!("{}", error);
        std::process::exit(-1);
    }
}

fn init_log(verbosity: usize) {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 1)
        .init()
        .unwrap();
}

fn run(args: Arguments) -> Result<()> {
    return commands::describe(
        args.in_file,
        args.user_key,
        args.user,
        args.key_usage,
    );
}
