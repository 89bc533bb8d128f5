/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `wordnet` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**, input failure: the tool could not read the input, or
///   the digraph or taxonomy it describes is malformed. Nothing was answered.
/// - Exit code **1**, query failure: the inputs loaded, but one or more
///   queries could not be answered (unknown noun, out-of-range vertex, bad
///   query line).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `wordnet` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured [`--max-file-size`] limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// `"-"`, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// More than one input of a single command was `-`.
    StdinConflict,

    /// A digraph, synset, or hypernym file is malformed.
    ParseFailed {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The parse error, including its line number.
        detail: String,
    },

    /// The hypernym graph is not a rooted DAG.
    InvalidTaxonomy {
        /// Description of the cycle or the offending roots.
        detail: String,
    },

    // --- Exit code 1: query failures ---
    /// Some query lines failed; each failure has already been reported.
    QueryFailures {
        /// Number of failed lines.
        failed: usize,
        /// Number of non-blank query lines read.
        total: usize,
    },

    /// A single query (such as `outcast`) could not be answered.
    QueryFailed {
        /// Why the query failed.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, invalid taxonomy).
    /// - `1`: query failure (unknown noun, out-of-range vertex).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::StdinConflict
            | Self::ParseFailed { .. }
            | Self::InvalidTaxonomy { .. } => 2,

            Self::QueryFailures { .. } | Self::QueryFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::StdinConflict => "error: at most one input may be read from stdin (-)".to_owned(),
            Self::ParseFailed { source, detail } => {
                format!("error: {source}: {detail}")
            }
            Self::InvalidTaxonomy { detail } => {
                format!("error: invalid taxonomy: {detail}")
            }
            Self::QueryFailures { failed, total } => {
                format!("error: {failed} of {total} queries failed")
            }
            Self::QueryFailed { detail } => format!("error: {detail}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
