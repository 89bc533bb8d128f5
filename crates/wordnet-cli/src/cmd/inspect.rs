//! Implementation of `wordnet inspect <synsets> <hypernyms>`.
//!
//! Builds the taxonomy and prints summary statistics to stdout:
//! - synset, hypernym edge and distinct noun counts
//! - the root synset (id and name)
//! - polysemous noun count (nouns naming more than one synset)
//! - the maximum number of hypernyms on any synset
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = the taxonomy could not be loaded.
use wordnet_core::Taxonomy;

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{load_taxonomy, stdout_error};
use crate::error::CliError;

/// Statistics gathered from a loaded [`Taxonomy`].
#[derive(Debug, PartialEq, Eq)]
pub struct InspectStats {
    /// Number of synsets (graph vertices).
    pub synset_count: usize,
    /// Number of hypernym edges.
    pub edge_count: usize,
    /// Number of distinct nouns.
    pub noun_count: usize,
    /// Nouns that appear in more than one synset.
    pub polysemous_count: usize,
    /// Largest number of direct hypernyms of any synset.
    pub max_hypernyms: usize,
    /// Id of the root synset.
    pub root_id: usize,
    /// Synonym field of the root synset.
    pub root_name: String,
}

impl InspectStats {
    /// Computes statistics from a loaded [`Taxonomy`].
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        let graph = taxonomy.graph();
        let polysemous_count = taxonomy
            .nouns()
            .filter(|noun| taxonomy.synsets_of(noun).is_some_and(|ids| ids.len() > 1))
            .count();
        let max_hypernyms = (0..graph.vertex_count())
            .map(|v| graph.out_degree(v))
            .max()
            .unwrap_or(0);
        let root_id = taxonomy.root();
        let root_name = taxonomy
            .synset(root_id)
            .map(|s| s.name().to_owned())
            .unwrap_or_default();

        Self {
            synset_count: taxonomy.synset_count(),
            edge_count: graph.edge_count(),
            noun_count: taxonomy.noun_count(),
            polysemous_count,
            max_hypernyms,
            root_id,
            root_name,
        }
    }
}

/// Runs the `inspect` command.
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
    let stats = InspectStats::from_taxonomy(&taxonomy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| stdout_error(&e))
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "synsets:        {}", stats.synset_count)?;
    writeln!(w, "hypernyms:      {}", stats.edge_count)?;
    writeln!(w, "nouns:          {}", stats.noun_count)?;
    writeln!(w, "polysemous:     {}", stats.polysemous_count)?;
    writeln!(w, "max_hypernyms:  {}", stats.max_hypernyms)?;
    writeln!(w, "root:           {} ({})", stats.root_id, stats.root_name)?;
    Ok(())
}

/// Writes inspect statistics as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "synset_count": stats.synset_count,
        "edge_count": stats.edge_count,
        "noun_count": stats.noun_count,
        "polysemous_count": stats.polysemous_count,
        "max_hypernyms": stats.max_hypernyms,
        "root": {
            "id": stats.root_id,
            "name": stats.root_name,
        },
    });
    let json = serde_json::to_string_pretty(&obj).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
