mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod logging;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = analyze_cmd::run(cli.args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
