//! keycvt - CACAO key conversion table generator
//!
//! Reads the CACAO input header, asks how the external library names its keys,
//! and prints a `{EXTERNAL, CACAO_KEY_*},` table ready to be pasted into a
//! backend's key translation table.

use clap::{Parser, Subcommand};
use keycvt::cli::{ExitCode, GenerateArgs, KeysArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// keycvt - CACAO key conversion table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the mapping table
    Generate(GenerateArgs),
    /// List key defines found in the header
    Keys(KeysArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so the generated table on stdout stays pasteable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Keys(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
