//! Taxonomy generator and benchmark utilities for `wordnet-core`.
//!
//! This crate provides deterministic generation of rooted hypernym DAGs and
//! their synset/hypernym record text, for benchmarking and property-based
//! testing of the SAP engine and the taxonomy.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratedTaxonomy, GeneratorConfig, SizeTier, generate_taxonomy};
