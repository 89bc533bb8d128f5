//! Implementation of `wordnet sap <digraph> [--queries <file>]`.
//!
//! Reads a digraph in the `V`, `E`, `v w`... text format, then answers one
//! shortest-ancestral-path query per line of the query stream (stdin unless
//! `--queries` names a file). Each line holds two vertex ids.
//!
//! Output (human mode): `length = L, ancestor = A`, with `-1` for both when
//! the vertices share no ancestor.
//! Output (JSON mode): one object per line with `length` and `ancestor`
//! (`null` when there is no ancestor).
//!
//! Exit codes: 0 = success, 1 = one or more query lines failed,
//! 2 = the digraph could not be read or parsed.
use wordnet_core::{Query, Sap, parse_digraph};

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{Ancestor, answer_queries};
use crate::error::CliError;
use crate::io::{ensure_single_stdin, open_queries, read_input};

/// Runs the `sap` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the digraph cannot be read or parsed, or if
///   both the digraph and the queries come from stdin.
/// - [`CliError::QueryFailures`] (exit code 1) if any query line failed.
pub fn run(
    digraph: &PathOrStdin,
    queries: Option<&PathOrStdin>,
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let stdin = PathOrStdin::Stdin;
    let queries = queries.unwrap_or(&stdin);
    ensure_single_stdin(&[digraph, queries])?;

    let text = read_input(digraph, max_file_size)?;
    let graph = parse_digraph(&text).map_err(|e| CliError::ParseFailed {
        source: digraph.to_string(),
        detail: e.to_string(),
    })?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "digraph loaded"
    );

    let sap = Sap::new(graph);
    let input = open_queries(queries)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    answer_queries(input, queries, &mut out, format, |a, b| {
        let v = parse_vertex(a)?;
        let w = parse_vertex(b)?;
        let ancestry = sap
            .ancestry(&Query::Single(v), &Query::Single(w))
            .map_err(|e| e.to_string())?;
        Ok(ancestry.map(|found| (found.length, Ancestor::Vertex(found.ancestor))))
    })
}

fn parse_vertex(token: &str) -> Result<usize, String> {
    token
        .parse()
        .map_err(|_| format!("invalid vertex id {token:?}"))
}
