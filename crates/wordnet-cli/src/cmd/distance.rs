//! Implementation of `wordnet distance <synsets> <hypernyms> [--queries <file>]`.
//!
//! Builds the taxonomy, then answers one noun-pair query per line of the
//! query stream (stdin unless `--queries` names a file).
//!
//! Output (human mode): `length = L, ancestor = NAME`, where `NAME` is the
//! full synonym field of the ancestor synset.
//! Output (JSON mode): one object per line.
//!
//! Exit codes: 0 = success, 1 = one or more query lines failed (typically an
//! unknown noun), 2 = the taxonomy could not be loaded.
use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{Ancestor, answer_queries, load_taxonomy};
use crate::error::CliError;
use crate::io::{ensure_single_stdin, open_queries};

/// Runs the `distance` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the taxonomy cannot be loaded or more than
///   one input is stdin.
/// - [`CliError::QueryFailures`] (exit code 1) if any query line failed.
pub fn run(
    synsets: &PathOrStdin,
    hypernyms: &PathOrStdin,
    queries: Option<&PathOrStdin>,
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let stdin = PathOrStdin::Stdin;
    let queries = queries.unwrap_or(&stdin);
    ensure_single_stdin(&[synsets, hypernyms, queries])?;

    let taxonomy = load_taxonomy(synsets, hypernyms, max_file_size)?;
    let input = open_queries(queries)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    answer_queries(input, queries, &mut out, format, |a, b| {
        let relation = taxonomy.relation(a, b).map_err(|e| e.to_string())?;
        Ok(relation.map(|(length, synset)| (length, Ancestor::Synset(synset.name()))))
    })
}
