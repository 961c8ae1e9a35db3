//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
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

impl fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrStdin::Stdin => f.write_str("-"),
            PathOrStdin::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints plain text to stdout. `Json` prints a single JSON object.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `forest` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List every connected component of an edge list.
    Components {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Report whether two elements share a component.
    Connected {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// First element id.
        #[arg(value_name = "V", allow_negative_numbers = true)]
        v: i64,
        /// Second element id.
        #[arg(value_name = "W", allow_negative_numbers = true)]
        w: i64,
    },

    /// Print the representative of an element's component.
    Find {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Element id.
        #[arg(value_name = "V", allow_negative_numbers = true)]
        v: i64,
    },

    /// Print the number of elements in an element's component.
    Size {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Element id.
        #[arg(value_name = "V", allow_negative_numbers = true)]
        v: i64,
    },

    /// Print summary statistics for an edge list.
    Inspect {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

impl Command {
    /// Returns the input file every subcommand reads.
    pub fn file(&self) -> &PathOrStdin {
        match self {
            Command::Components { file }
            | Command::Connected { file, .. }
            | Command::Find { file, .. }
            | Command::Size { file, .. }
            | Command::Inspect { file } => file,
        }
    }
}

/// Root CLI struct for the `forest` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "forest",
    version,
    about = "Connected components over plain-text edge lists",
    long_about = "Builds a disjoint-set forest from an edge list and answers\n\
                  component queries. The input holds an element count on its\n\
                  first line followed by one `v w` pair per line; `#` starts a\n\
                  comment."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log parsing and construction details to stderr (incompatible with
    /// `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `FOREST_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "FOREST_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
