#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod graph;
pub mod outcast;
pub mod parse;
pub mod sap;
pub mod taxonomy;

pub use graph::{
    BreadthFirstPaths, Digraph, DigraphBuilder, GraphError, MAX_VERTEX_COUNT, detect_cycles,
    has_cycle,
};
pub use outcast::{OutcastError, outcast};
pub use parse::{
    HypernymRecord, ParseError, Synset, add_hypernym_edges, parse_digraph, parse_hypernyms,
    parse_synsets,
};
pub use sap::{Ancestry, Query, Sap, SapError};
pub use taxonomy::{StructureError, Taxonomy, TaxonomyError, validate_rooted_dag};

/// Returns the current version of the wordnet-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
