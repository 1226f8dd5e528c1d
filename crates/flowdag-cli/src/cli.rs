//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default cap on input size for files and stdin: 64 MiB.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value lines (default).
    Human,
    /// A single JSON object on stdout.
    Json,
}

/// Top-level CLI arguments for the `flowdag` binary.
#[derive(Parser)]
#[command(name = "flowdag", about = "Pipeline graph analysis CLI")]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Maximum input size in bytes for files and stdin.
    #[arg(long, global = true, env = "FLOWDAG_MAX_INPUT_SIZE", default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    pub max_input_size: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `flowdag` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze a pipeline JSON file: node count, edge count, acyclicity.
    Check {
        /// Path to a pipeline JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the flowdag-core library version.
    Version,
}
