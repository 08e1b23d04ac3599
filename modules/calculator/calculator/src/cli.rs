//! Command line surface of the `calculator-demo` binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use calculator_sdk::CalculatorApi;
use clap::{Args, Parser, Subcommand};

use crate::config::DemoConfig;
use crate::demo::run_demo;

/// Calculator - arithmetic utility and demonstration routine
#[derive(Debug, Parser)]
#[command(name = "calculator-demo")]
#[command(about = "Calculator - arithmetic utility and demonstration routine")]
#[command(version)]
pub struct Cli {
    /// Path to YAML configuration file with demo inputs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    pub print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands; `demo` runs when none is given.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run every operation with the configured sample inputs (default)
    Demo,
    /// Print a + b
    Add(Operands),
    /// Print a - b
    Subtract(Operands),
    /// Print a * b
    Multiply(Operands),
    /// Print a / b as a floating-point quotient
    Divide(Operands),
    /// Print the n-th Fibonacci number
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Print a greeting for the given name
    Greet { name: String },
}

/// Left and right operands of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Args)]
pub struct Operands {
    #[arg(allow_negative_numbers = true)]
    pub a: i32,
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

/// Execute the parsed command line, writing results to `out`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, if a single
/// operation rejects its arguments, or if writing to `out` fails.
pub fn run<W: Write>(cli: &Cli, api: &dyn CalculatorApi, out: &mut W) -> anyhow::Result<()> {
    let config =
        DemoConfig::load(cli.config.as_deref()).context("loading demo configuration")?;

    if cli.print_config {
        writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        return Ok(());
    }

    execute(cli.command.as_ref().unwrap_or(&Commands::Demo), api, &config, out)
}

/// Dispatch a single command.
///
/// # Errors
/// Returns the operation's `CalculatorError` for rejected arguments (the demo
/// reports those inline instead) or an I/O error from `out`.
pub fn execute<W: Write>(
    command: &Commands,
    api: &dyn CalculatorApi,
    config: &DemoConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::debug!(command = ?command, "executing command");

    match command {
        Commands::Demo => run_demo(api, config, out)?,
        Commands::Add(Operands { a, b }) => writeln!(out, "{}", api.add(*a, *b))?,
        Commands::Subtract(Operands { a, b }) => writeln!(out, "{}", api.subtract(*a, *b))?,
        Commands::Multiply(Operands { a, b }) => writeln!(out, "{}", api.multiply(*a, *b))?,
        Commands::Divide(Operands { a, b }) => writeln!(out, "{}", api.divide(*a, *b)?)?,
        Commands::Fibonacci { n } => writeln!(out, "{}", api.fibonacci(*n)?)?,
        Commands::Greet { name } => writeln!(out, "{}", api.greet(name))?,
    }
    Ok(())
}
