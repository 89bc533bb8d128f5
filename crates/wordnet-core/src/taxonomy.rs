//! WordNet-style noun taxonomy backed by the SAP engine.
//!
//! A [`Taxonomy`] is built from two record sets (see [`crate::parse`]):
//! synsets, each naming one concept with one or more synonyms, and hypernym
//! records, each linking a concept to the more general concepts it is a kind
//! of. The hypernym graph must be a rooted DAG: acyclic, with exactly one
//! concept that has no hypernym.
//!
//! Noun queries map each word to every synset it appears in and run a set
//! query on the engine, so a polysemous word is as close to another word as
//! its closest sense.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::graph::{Digraph, DigraphBuilder, detect_cycles};
use crate::parse::{self, HypernymRecord, ParseError, Synset};
use crate::sap::{Ancestry, Query, Sap, SapError};

/// The hypernym graph is not a rooted DAG.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The graph has a directed cycle.
    #[error("hypernym graph contains a cycle: {}", format_cycle(.cycle))]
    Cycle {
        /// One cycle, closed (first vertex repeated at the end).
        cycle: Vec<usize>,
    },

    /// The graph does not have exactly one vertex without outgoing edges.
    #[error("hypernym graph must have exactly one root, found {}", .roots.len())]
    RootCount {
        /// Every out-degree-zero vertex, in increasing id order.
        roots: Vec<usize>,
    },
}

fn format_cycle(cycle: &[usize]) -> String {
    cycle.iter().fold(String::new(), |mut s, v| {
        if !s.is_empty() {
            s.push_str(" -> ");
        }
        write!(s, "{v}").ok();
        s
    })
}

/// Errors from building or querying a [`Taxonomy`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    /// A synset record is malformed.
    #[error("synsets: {0}")]
    Synsets(ParseError),

    /// A hypernym record is malformed or references an unknown synset.
    #[error("hypernyms: {0}")]
    Hypernyms(ParseError),

    /// The hypernym graph is not a rooted DAG.
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A query word is not in the taxonomy.
    #[error("not a noun in this taxonomy: {0:?}")]
    UnknownNoun(String),

    /// The underlying SAP query failed.
    #[error(transparent)]
    Sap(#[from] SapError),
}

/// Checks that `graph` is acyclic with exactly one out-degree-zero vertex.
///
/// Cycles are checked first. Returns the root on success.
///
/// # Errors
///
/// - [`StructureError::Cycle`]: the graph has a directed cycle.
/// - [`StructureError::RootCount`]: zero or several roots.
pub fn validate_rooted_dag(graph: &Digraph) -> Result<usize, StructureError> {
    if let Some(cycle) = detect_cycles(graph).into_iter().next() {
        return Err(StructureError::Cycle { cycle });
    }
    match graph.sinks().as_slice() {
        [root] => Ok(*root),
        roots => Err(StructureError::RootCount {
            roots: roots.to_vec(),
        }),
    }
}

/// A validated noun taxonomy.
#[derive(Debug)]
pub struct Taxonomy {
    synsets: Vec<Synset>,
    nouns: BTreeMap<String, BTreeSet<usize>>,
    root: usize,
    sap: Sap,
}

impl Taxonomy {
    /// Parses synset and hypernym record text and builds the taxonomy.
    ///
    /// # Errors
    ///
    /// - [`TaxonomyError::Synsets`] / [`TaxonomyError::Hypernyms`]: format
    ///   errors, including out-of-range ids.
    /// - [`TaxonomyError::Structure`]: the graph is not a rooted DAG.
    pub fn from_records(synsets: &str, hypernyms: &str) -> Result<Self, TaxonomyError> {
        let synsets = parse::parse_synsets(synsets).map_err(TaxonomyError::Synsets)?;
        let hypernyms = parse::parse_hypernyms(hypernyms).map_err(TaxonomyError::Hypernyms)?;
        Self::new(synsets, &hypernyms)
    }

    /// Builds the taxonomy from parsed records.
    ///
    /// `synsets` must be indexed by id (`synsets[i].id == i`), as returned by
    /// [`parse::parse_synsets`].
    ///
    /// # Errors
    ///
    /// Same as [`Taxonomy::from_records`], minus text-level format errors.
    pub fn new(synsets: Vec<Synset>, hypernyms: &[HypernymRecord]) -> Result<Self, TaxonomyError> {
        if let Some((line, s)) = synsets.iter().enumerate().find(|(i, s)| s.id != *i) {
            return Err(TaxonomyError::Synsets(ParseError::IdOutOfRange {
                line: line + 1,
                id: s.id,
                synset_count: synsets.len(),
            }));
        }

        let edge_hint = hypernyms.iter().map(|h| h.parents.len()).sum();
        let mut builder = DigraphBuilder::with_capacity(synsets.len(), edge_hint);
        parse::add_hypernym_edges(&mut builder, hypernyms).map_err(TaxonomyError::Hypernyms)?;
        let graph = builder.build();
        let root = validate_rooted_dag(&graph)?;

        let mut nouns: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for synset in &synsets {
            for word in &synset.synonyms {
                nouns.entry(word.clone()).or_default().insert(synset.id);
            }
        }

        tracing::debug!(
            synsets = synsets.len(),
            edges = graph.edge_count(),
            nouns = nouns.len(),
            root,
            "taxonomy built"
        );

        Ok(Self {
            synsets,
            nouns,
            root,
            sap: Sap::new(graph),
        })
    }

    /// Iterates over every distinct noun, in sorted order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.nouns.keys().map(String::as_str)
    }

    /// Returns the number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Returns `true` if `word` names at least one synset.
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Returns the ids of every synset `word` appears in.
    pub fn synsets_of(&self, word: &str) -> Option<&BTreeSet<usize>> {
        self.nouns.get(word)
    }

    /// Returns the synset with the given id.
    pub fn synset(&self, id: usize) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Returns the number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Returns the id of the unique root synset.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the hypernym graph.
    pub fn graph(&self) -> &Digraph {
        self.sap.graph()
    }

    /// Length of the shortest ancestral path between any sense of `noun_a`
    /// and any sense of `noun_b`.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::UnknownNoun`] if either word is not indexed.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<Option<usize>, TaxonomyError> {
        Ok(self.ancestry(noun_a, noun_b)?.map(|a| a.length))
    }

    /// Name of the synset that is the common ancestor of `noun_a` and
    /// `noun_b` on a shortest ancestral path, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::UnknownNoun`] if either word is not indexed.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<Option<&str>, TaxonomyError> {
        Ok(self.relation(noun_a, noun_b)?.map(|(_, s)| s.name()))
    }

    /// Distance and ancestor synset in one call.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::UnknownNoun`] if either word is not indexed.
    pub fn relation(
        &self,
        noun_a: &str,
        noun_b: &str,
    ) -> Result<Option<(usize, &Synset)>, TaxonomyError> {
        Ok(self
            .ancestry(noun_a, noun_b)?
            .and_then(|a| self.synset(a.ancestor).map(|s| (a.length, s))))
    }

    fn ancestry(&self, noun_a: &str, noun_b: &str) -> Result<Option<Ancestry>, TaxonomyError> {
        let a = self.noun_query(noun_a)?;
        let b = self.noun_query(noun_b)?;
        Ok(self.sap.ancestry(&a, &b)?)
    }

    fn noun_query(&self, noun: &str) -> Result<Query, TaxonomyError> {
        self.synsets_of(noun)
            .map(|ids| Query::Set(ids.clone()))
            .ok_or_else(|| TaxonomyError::UnknownNoun(noun.to_owned()))
    }
}

#[cfg(test)]
mod tests;
