//! Synthetic taxonomy generator.
//!
//! Produces record text that [`wordnet_core::Taxonomy::from_records`]
//! accepts, with WordNet-like shape: one root, mostly single inheritance,
//! a minority of synsets with several hypernyms, and nouns shared between
//! synsets.

pub mod records;
pub mod topology;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the taxonomy generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of synsets, including the root.
    pub num_synsets: usize,
    /// Upper bound on hypernyms per synset.
    pub max_hypernyms: usize,
    /// Fraction of synsets with more than one hypernym (0.0-1.0).
    pub multi_parent_rate: f64,
    /// Parents are drawn from the `locality` synsets created just before the
    /// child; smaller values give deeper hierarchies.
    pub locality: usize,
    /// Upper bound on synonyms per synset.
    pub max_synonyms: usize,
    /// Probability that a synonym reuses an existing noun (0.0-1.0).
    pub polysemy_rate: f64,
    /// Whether to add a two-synset cycle, for rejection benchmarks.
    pub inject_cycle: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 synsets
    Small,
    /// 2,000 synsets
    Medium,
    /// 20,000 synsets
    Large,
    /// 82,192 synsets, the size of the WordNet 3.0 noun hierarchy
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_synsets, locality) = match self {
            SizeTier::Small => (100, 20),
            SizeTier::Medium => (2_000, 200),
            SizeTier::Large => (20_000, 1_500),
            SizeTier::XLarge => (82_192, 5_000),
        };
        GeneratorConfig {
            seed,
            num_synsets,
            max_hypernyms: 3,
            multi_parent_rate: 0.02,
            locality,
            max_synonyms: 3,
            polysemy_rate: 0.1,
            inject_cycle: false,
        }
    }
}

/// Generated record text plus the facts needed to check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTaxonomy {
    /// Synset records, one `id,synonyms,gloss` line per synset.
    pub synsets: String,
    /// Hypernym records, one `id,parent,...` line per non-root synset.
    pub hypernyms: String,
    /// Hypernym ids of every synset, indexed by synset id.
    pub parents: Vec<Vec<usize>>,
    /// Every distinct noun, sorted.
    pub nouns: Vec<String>,
}

impl GeneratedTaxonomy {
    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of hypernym edges.
    pub fn edge_count(&self) -> usize {
        self.parents.iter().map(Vec::len).sum()
    }

    /// The hypernym graph in the plain digraph format: vertex count, edge
    /// count, then one `v w` line per edge.
    pub fn digraph_text(&self) -> String {
        records::format_digraph(&self.parents)
    }
}

/// Generates a taxonomy from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_taxonomy(config: &GeneratorConfig) -> GeneratedTaxonomy {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let parents = topology::build_hypernyms(config, &mut rng);
    let (synsets, nouns) = records::build_synsets(config, &mut rng);
    let hypernyms = records::format_hypernyms(&parents);
    GeneratedTaxonomy {
        synsets,
        hypernyms,
        parents,
        nouns,
    }
}
