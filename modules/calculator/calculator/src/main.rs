//! Demonstration binary for the calculator module.
//!
//! Without a subcommand it runs the demo routine; single operations are
//! available as subcommands.
//!
//! Demo inputs are loaded from:
//! 1. built-in defaults
//! 2. --config YAML file
//! 3. `CALCULATOR_*` environment variables

use calculator::Service;
use calculator::cli::{Cli, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    calculator::logging::init_logging(cli.verbose)?;

    let service = Service::new();
    let stdout = std::io::stdout();
    run(&cli, &service, &mut stdout.lock())
}
