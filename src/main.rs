use clap::Parser;

use reloc_sim::cli::Cli;
use reloc_sim::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    std::process::exit(commands::run(&cli));
}
