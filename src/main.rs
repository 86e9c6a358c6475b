//! Live Probe CLI
//!
//! Normalizes raw stack-trace text captured by live instrumentation
//! agents and validates protocol documents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use live_probe_protocol::commands::{
    display_schema, display_version, execute_parse, validate_file, DocumentKind, ParseArgs,
};

/// Live Probe - stack trace normalization for live instrumentation
#[derive(Parser, Debug)]
#[command(name = "live-probe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect and parse a raw stack trace
    Parse {
        /// Raw stack trace file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Hide frames injected by the instrumentation agent
        #[arg(long)]
        hide_agent_frames: bool,

        /// Print JSON instead of the rendered trace
        #[arg(long)]
        json: bool,

        /// Output path for the JSON trace (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a protocol JSON document
    Validate {
        /// Path to JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// Kind of document
        #[arg(short, long, value_enum, default_value = "stack-trace")]
        kind: DocumentKind,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Parse {
            input,
            hide_agent_frames,
            json,
            output,
        } => {
            let args = ParseArgs {
                input,
                hide_agent_frames,
                print_json: json,
                output_json: output,
            };

            execute_parse(args)?;
        }

        Commands::Validate { file, kind } => {
            validate_file(&file, kind)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
