//! armid-generator - generates typed resource ID parsers from example IDs.

use anyhow::Result;
use clap::Parser;

use armid_generator::{logging, print_error, Cli, Config};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init(level, cli.log_json);

    cli.run(&config)
}
