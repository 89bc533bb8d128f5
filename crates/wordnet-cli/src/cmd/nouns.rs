//! Implementation of `wordnet nouns <synsets> <hypernyms>`.
//!
//! Output (human mode): one noun per line, sorted.
//! Output (JSON mode): a JSON object `{"nouns": [...], "count": N}`.
//!
//! Exit codes: 0 = success, 2 = the taxonomy could not be loaded.
use wordnet_core::Taxonomy;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{load_taxonomy, stdout_error};
use crate::error::CliError;

/// Runs the `nouns` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the taxonomy cannot be loaded.
pub fn run(
    synsets: &PathOrStdin,
    hypernyms: &PathOrStdin,
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let taxonomy = load_taxonomy(synsets, hypernyms, max_file_size)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &taxonomy),
        OutputFormat::Json => print_json(&mut out, &taxonomy),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, taxonomy: &Taxonomy) -> std::io::Result<()> {
    for noun in taxonomy.nouns() {
        writeln!(w, "{noun}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, taxonomy: &Taxonomy) -> std::io::Result<()> {
    let nouns: Vec<serde_json::Value> = taxonomy.nouns().map(serde_json::Value::from).collect();

    let mut obj = serde_json::Map::new();
    obj.insert("nouns".to_owned(), serde_json::Value::Array(nouns));
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(taxonomy.noun_count().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
