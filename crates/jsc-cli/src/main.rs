//! # jsc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// JSON Schema conformance harness.
///
/// Loads the official JSON-Schema-Test-Suite, runs every registered
/// validator implementation through it, and writes ranked conformance
/// reports in Markdown and JSON.
#[derive(Parser, Debug)]
#[command(name = "jsc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the conformance suite and write reports.
    Run(jsc_cli::run::RunArgs),
    /// Print the known draft registry.
    ListDrafts,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => jsc_cli::run::run(&args),
        Commands::ListDrafts => {
            jsc_cli::run::list_drafts();
            Ok(())
        }
    }
}
