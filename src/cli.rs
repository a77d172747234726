//! Command-line interface definition

use clap::Parser;
use pnpl::interpreter::constants::DEFAULT_MEMORY_SIZE;
use std::path::PathBuf;

/// Prime Number Programming Language, an esoteric language based on the
/// fundamental theorem of arithmetic.
#[derive(Parser, Debug)]
#[command(name = "pnpl", version, about)]
pub struct Cli {
    /// Execute the program provided as an argument
    #[arg(short, long, value_name = "PROGRAM", group = "mode")]
    pub eval: Option<String>,

    /// Read and execute the program stored in the input file
    #[arg(short, long, value_name = "FILE", group = "mode")]
    pub run: Option<PathBuf>,

    /// Start the interactive session
    #[arg(long, group = "mode")]
    pub repl: bool,

    /// Convert a Brainfuck program to PNPL
    #[arg(
        long = "bf2pnpl",
        visible_alias = "b2p",
        num_args = 2,
        value_names = ["INPUT_FILE", "OUTPUT_FILE"],
        group = "mode"
    )]
    pub bf2pnpl: Option<Vec<PathBuf>>,

    /// Convert a PNPL program to Brainfuck
    #[arg(
        long = "pnpl2bf",
        visible_alias = "p2b",
        num_args = 2,
        value_names = ["INPUT_FILE", "OUTPUT_FILE"],
        group = "mode"
    )]
    pub pnpl2bf: Option<Vec<PathBuf>>,

    /// Set the size of the memory array
    #[arg(short, long, value_name = "SIZE", default_value_t = DEFAULT_MEMORY_SIZE)]
    pub memory: usize,

    /// Feed standard input to input instructions (ignored by default)
    #[arg(long)]
    pub stdin: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
