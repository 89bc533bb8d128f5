//! Implementation of `wordnet outcast <synsets> <hypernyms> <noun>...`.
//!
//! Prints the noun whose summed distance to the others is largest.
//! JSON mode prints `{"outcast": NOUN, "nouns": [...]}`.
//!
//! Exit codes: 0 = success, 1 = a noun is unknown or unrelated,
//! 2 = the taxonomy could not be loaded.
use std::io::Write as _;

use wordnet_core::outcast;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{load_taxonomy, stdout_error};
use crate::error::CliError;

/// Runs the `outcast` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the taxonomy cannot be loaded.
/// - [`CliError::QueryFailed`] (exit code 1) for unknown nouns.
pub fn run(
    synsets: &PathOrStdin,
    hypernyms: &PathOrStdin,
    nouns: &[String],
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let taxonomy = load_taxonomy(synsets, hypernyms, max_file_size)?;
    let found = outcast(&taxonomy, nouns).map_err(|e| CliError::QueryFailed {
        detail: e.to_string(),
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => writeln!(out, "{found}"),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "outcast": found, "nouns": nouns });
            writeln!(out, "{obj}")
        }
    }
    .map_err(|e| stdout_error(&e))
}
