//! qsteiner command-line interface.
//!
//! Enumerates Steiner-tree candidates classically and uses Grover
//! amplitude amplification on a simulated register to recover the
//! cheapest candidate's rank.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::{CircuitFormat, OutputFormat};
use commands::{circuit, search, steiner, version};
use config::CliConfig;
use qsteiner_grover::{Iterations, SearchConfig};

/// qsteiner - Grover search over ranked Steiner-tree candidates
#[derive(Parser)]
#[command(name = "qsteiner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command that runs a search.
#[derive(Args)]
struct SearchArgs {
    /// Number of shots
    #[arg(short, long)]
    shots: Option<u32>,

    /// Amplification rounds (a number, or "optimal")
    #[arg(short, long)]
    iterations: Option<Iterations>,

    /// RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Register limit including the ancilla
    #[arg(long)]
    max_qubits: Option<u32>,

    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl SearchArgs {
    fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(shots) = self.shots {
            config.shots = shots;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_qubits) = self.max_qubits {
            config.max_qubits = max_qubits;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Amplify one target index among N candidates
    Search {
        /// Number of candidates N
        #[arg(short = 'n', long)]
        candidates: u64,

        /// Target index (0-based rank)
        #[arg(short, long, default_value = "0")]
        target: u64,

        #[command(flatten)]
        args: SearchArgs,
    },

    /// Enumerate Steiner candidates and amplify the cheapest
    Steiner {
        /// Problem file (YAML or JSON); the built-in demo graph if omitted
        #[arg(short, long)]
        graph: Option<PathBuf>,

        #[command(flatten)]
        args: SearchArgs,
    },

    /// Print the search circuit without running it
    Circuit {
        /// Number of candidates N
        #[arg(short = 'n', long)]
        candidates: u64,

        /// Target index (0-based rank)
        #[arg(short, long, default_value = "0")]
        target: u64,

        /// Amplification rounds (a number, or "optimal")
        #[arg(short, long)]
        iterations: Option<Iterations>,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: CircuitFormat,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: u8, config: &CliConfig) {
    let filter = match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Search {
            candidates,
            target,
            args,
        } => search::execute(candidates, target, &args.apply(config.search), args.format),

        Commands::Steiner { graph, args } => {
            steiner::execute(graph.as_deref(), &args.apply(config.search), args.format)
        }

        Commands::Circuit {
            candidates,
            target,
            iterations,
            format,
        } => {
            let iterations = iterations.unwrap_or(config.search.iterations);
            circuit::execute(candidates, target, iterations, format)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
