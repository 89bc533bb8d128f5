/// Command modules for the `wordnet` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`CliError`] on failure. Helpers shared by several commands live here.
pub mod distance;
pub mod inspect;
pub mod nouns;
pub mod outcast;
pub mod sap;

use std::fmt;
use std::io::{BufRead, Write};

use wordnet_core::{Taxonomy, TaxonomyError};

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::error::CliError;
use crate::io::{ensure_single_stdin, read_input};

// ---------------------------------------------------------------------------
// Taxonomy loading
// ---------------------------------------------------------------------------

/// Reads both record files and builds the taxonomy.
///
/// # Errors
///
/// Exit code 2 for I/O failures, malformed records, or a hypernym graph that
/// is not a rooted DAG.
pub(crate) fn load_taxonomy(
    synsets: &PathOrStdin,
    hypernyms: &PathOrStdin,
    max_file_size: u64,
) -> Result<Taxonomy, CliError> {
    ensure_single_stdin(&[synsets, hypernyms])?;
    let synsets_text = read_input(synsets, max_file_size)?;
    let hypernyms_text = read_input(hypernyms, max_file_size)?;

    Taxonomy::from_records(&synsets_text, &hypernyms_text).map_err(|e| match e {
        TaxonomyError::Synsets(e) => CliError::ParseFailed {
            source: synsets.to_string(),
            detail: e.to_string(),
        },
        TaxonomyError::Hypernyms(e) => CliError::ParseFailed {
            source: hypernyms.to_string(),
            detail: e.to_string(),
        },
        TaxonomyError::Structure(e) => CliError::InvalidTaxonomy {
            detail: e.to_string(),
        },
        e @ (TaxonomyError::UnknownNoun(_) | TaxonomyError::Sap(_)) => CliError::QueryFailed {
            detail: e.to_string(),
        },
    })
}

/// Maps a write failure on stdout to a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Query loop
// ---------------------------------------------------------------------------

/// The ancestor reported for one query: a vertex id or a synset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ancestor<'a> {
    Vertex(usize),
    Synset(&'a str),
}

impl Ancestor<'_> {
    fn to_json(self) -> serde_json::Value {
        match self {
            Ancestor::Vertex(v) => serde_json::Value::from(v),
            Ancestor::Synset(name) => serde_json::Value::from(name),
        }
    }
}

impl fmt::Display for Ancestor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ancestor::Vertex(v) => write!(f, "{v}"),
            Ancestor::Synset(name) => f.write_str(name),
        }
    }
}

/// Answer to one query line; `None` means no common ancestor.
pub(crate) type Answer<'a> = Option<(usize, Ancestor<'a>)>;

/// Reads query lines of two whitespace-separated operands from `input`,
/// answers each with `answer`, and writes one result per line to `out`.
///
/// Blank lines are skipped. A line that is malformed or that `answer`
/// rejects is reported on stderr as `error: <source>:<line>: <reason>` and
/// processing continues. Output is flushed after every line.
///
/// # Errors
///
/// - [`CliError::QueryFailures`] if any line failed.
/// - [`CliError::IoError`] / [`CliError::StdinReadError`] on I/O failure.
pub(crate) fn answer_queries<'a, R, W, F>(
    input: R,
    source: &PathOrStdin,
    out: &mut W,
    format: OutputFormat,
    mut answer: F,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str, &str) -> Result<Answer<'a>, String>,
{
    let mut total = 0usize;
    let mut failed = 0usize;

    for (index, raw) in input.split(b'\n').enumerate() {
        let line_no = index + 1;
        let raw = raw.map_err(|e| match source {
            PathOrStdin::Stdin => CliError::StdinReadError {
                detail: e.to_string(),
            },
            PathOrStdin::Path(_) => CliError::IoError {
                source: source.to_string(),
                detail: e.to_string(),
            },
        })?;

        let result = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                total += 1;
                let operands: Vec<&str> = line.split_whitespace().collect();
                match operands.as_slice() {
                    &[a, b] => answer(a, b).map(|ans| (a, b, ans)),
                    other => Err(format!(
                        "expected two operands, found {}",
                        other.len()
                    )),
                }
            }
            Err(e) => {
                total += 1;
                Err(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
            }
        };

        match result {
            Ok((a, b, ans)) => {
                write_answer(out, format, line_no, a, b, ans).map_err(|e| stdout_error(&e))?;
                out.flush().map_err(|e| stdout_error(&e))?;
            }
            Err(reason) => {
                failed += 1;
                tracing::debug!(line = line_no, %reason, "query failed");
                eprintln!("error: {source}:{line_no}: {reason}");
            }
        }
    }

    tracing::debug!(total, failed, "queries answered");
    if failed > 0 {
        return Err(CliError::QueryFailures { failed, total });
    }
    Ok(())
}

/// Writes one answer. Human mode prints `-1` for a missing length or
/// ancestor; JSON mode prints `null`.
fn write_answer<W: Write>(
    w: &mut W,
    format: OutputFormat,
    line_no: usize,
    a: &str,
    b: &str,
    answer: Answer<'_>,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => match answer {
            Some((length, ancestor)) => writeln!(w, "length = {length}, ancestor = {ancestor}"),
            None => writeln!(w, "length = -1, ancestor = -1"),
        },
        OutputFormat::Json => {
            let (length, ancestor) = match answer {
                Some((length, ancestor)) => (serde_json::Value::from(length), ancestor.to_json()),
                None => (serde_json::Value::Null, serde_json::Value::Null),
            };
            let obj = serde_json::json!({
                "line": line_no,
                "a": a,
                "b": b,
                "length": length,
                "ancestor": ancestor,
            });
            writeln!(w, "{obj}")
        }
    }
}
