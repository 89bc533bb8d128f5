//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
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

/// Labels the source in diagnostics: `-` for stdin, otherwise the path.
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
/// `Human` prints the classic `length = L, ancestor = A` lines. `Json` prints
/// one JSON object per answered query, or a single object for whole-taxonomy
/// commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `wordnet` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Answer shortest-ancestral-path queries over a digraph file.
    ///
    /// Each query line holds two vertex ids `v w`.
    Sap {
        /// Digraph file (`V`, `E`, then `E` pairs `v w`), or `-` for stdin.
        #[arg(value_name = "DIGRAPH")]
        digraph: PathOrStdin,
        /// Query file, or `-` for stdin (the default).
        #[arg(long, value_name = "FILE")]
        queries: Option<PathOrStdin>,
    },

    /// Answer noun distance queries over a synset/hypernym taxonomy.
    ///
    /// Each query line holds two nouns `a b`.
    Distance {
        /// Synset records, or `-` for stdin.
        #[arg(value_name = "SYNSETS")]
        synsets: PathOrStdin,
        /// Hypernym records, or `-` for stdin.
        #[arg(value_name = "HYPERNYMS")]
        hypernyms: PathOrStdin,
        /// Query file, or `-` for stdin (the default).
        #[arg(long, value_name = "FILE")]
        queries: Option<PathOrStdin>,
    },

    /// List every noun in a taxonomy, sorted.
    Nouns {
        /// Synset records, or `-` for stdin.
        #[arg(value_name = "SYNSETS")]
        synsets: PathOrStdin,
        /// Hypernym records, or `-` for stdin.
        #[arg(value_name = "HYPERNYMS")]
        hypernyms: PathOrStdin,
    },

    /// Print summary statistics for a taxonomy.
    Inspect {
        /// Synset records, or `-` for stdin.
        #[arg(value_name = "SYNSETS")]
        synsets: PathOrStdin,
        /// Hypernym records, or `-` for stdin.
        #[arg(value_name = "HYPERNYMS")]
        hypernyms: PathOrStdin,
    },

    /// Find the noun least related to the others.
    Outcast {
        /// Synset records, or `-` for stdin.
        #[arg(value_name = "SYNSETS")]
        synsets: PathOrStdin,
        /// Hypernym records, or `-` for stdin.
        #[arg(value_name = "HYPERNYMS")]
        hypernyms: PathOrStdin,
        /// Two or more nouns.
        #[arg(value_name = "NOUN", num_args = 2.., required = true)]
        nouns: Vec<String>,
    },
}

/// Root CLI struct for the `wordnet` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "wordnet",
    version,
    about = "Shortest ancestral paths over digraphs and WordNet taxonomies",
    long_about = "Shortest ancestral path (SAP) queries over directed graphs, and\n\
                  semantic distance, noun listing, inspection and outcast queries\n\
                  over WordNet-style synset/hypernym taxonomies."
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

    /// Log debug events to stderr: input sizes, taxonomy statistics
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `WORDNET_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "WORDNET_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
