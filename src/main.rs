use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use doclinks::{commands, diagnostics};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doclinks", about = "Resolve documented symbols into stable documentation links")]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every doclet and print the link table
    Links {
        /// Print the link manifest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render one page per resolved doclet and write links.json
    Publish {
        /// Output directory (overrides `destination` in .doclinks.toml)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },
    /// Print the href for each longname
    Resolve {
        /// Longnames to resolve, e.g. `module:enyo/Control~Control`
        #[arg(required = true)]
        longnames: Vec<String>,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_err| return EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Links { json } => commands::links(json).map(|()| return ExitCode::SUCCESS),
        Commands::Publish { destination } => commands::publish(destination).map(|()| return ExitCode::SUCCESS),
        Commands::Resolve { longnames } => commands::resolve(&longnames),
    };

    return match result {
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
        Ok(code) => code,
    };
}
