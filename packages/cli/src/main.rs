use std::io;

use clap::Parser;
use filetree_cli::Cli;

fn main() {
    let cli = Cli::parse();
    filetree_cli::init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = filetree_cli::run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
