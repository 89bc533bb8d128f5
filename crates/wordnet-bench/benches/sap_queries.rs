//! SAP query benchmarks: single-vertex, vertex-set, cached repeats and noun
//! distance.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordnet_bench::{SizeTier, generate_taxonomy};
use wordnet_core::{Query, Sap, Taxonomy, parse_digraph};

const TIERS: [(&str, SizeTier); 4] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
    ("XL", SizeTier::XLarge),
];

struct Setup {
    sap: Sap,
    taxonomy: Taxonomy,
    pairs: Vec<(usize, usize)>,
    noun_pairs: Vec<(String, String)>,
}

fn setup(tier: SizeTier) -> Setup {
    let generated = generate_taxonomy(&tier.config(42));
    let sap = Sap::new(parse_digraph(&generated.digraph_text()).expect("parses"));
    let taxonomy =
        Taxonomy::from_records(&generated.synsets, &generated.hypernyms).expect("builds");

    let mut rng = StdRng::seed_from_u64(7);
    let n = generated.synset_count();
    let pairs = (0..64)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    let nouns = &generated.nouns;
    let noun_pairs = (0..64)
        .map(|_| {
            (
                nouns[rng.gen_range(0..nouns.len())].clone(),
                nouns[rng.gen_range(0..nouns.len())].clone(),
            )
        })
        .collect();

    Setup {
        sap,
        taxonomy,
        pairs,
        noun_pairs,
    }
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_single");

    for (name, tier) in TIERS {
        let s = setup(tier);

        group.bench_function(BenchmarkId::new("distinct_pairs", name), |b| {
            b.iter(|| {
                for &(v, w) in &s.pairs {
                    let _ = s.sap.length(v, w).expect("in range");
                }
            });
        });

        let (v, w) = s.pairs[0];
        group.bench_function(BenchmarkId::new("cached_repeat", name), |b| {
            b.iter(|| {
                let _ = s.sap.length(v, w).expect("in range");
                let _ = s.sap.ancestor(w, v).expect("in range");
            });
        });
    }
    group.finish();
}

fn bench_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("sap_sets");

    for (name, tier) in TIERS {
        let s = setup(tier);
        let queries: Vec<(Query, Query)> = s
            .pairs
            .chunks_exact(4)
            .map(|chunk| {
                (
                    Query::set(chunk.iter().map(|p| p.0)),
                    Query::set(chunk.iter().map(|p| p.1)),
                )
            })
            .collect();

        group.bench_function(BenchmarkId::new("four_by_four", name), |b| {
            b.iter(|| {
                for (a, q) in &queries {
                    let _ = s.sap.ancestry(a, q).expect("valid sets");
                }
            });
        });
    }
    group.finish();
}

fn bench_nouns(c: &mut Criterion) {
    let mut group = c.benchmark_group("noun_distance");

    for (name, tier) in TIERS {
        let s = setup(tier);

        group.bench_function(BenchmarkId::new("distance", name), |b| {
            b.iter(|| {
                for (a, w) in &s.noun_pairs {
                    let _ = s.taxonomy.distance(a, w).expect("known nouns");
                }
            });
        });

        group.bench_function(BenchmarkId::new("relation", name), |b| {
            b.iter(|| {
                for (a, w) in &s.noun_pairs {
                    let _ = s.taxonomy.relation(a, w).expect("known nouns");
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_sets, bench_nouns);
criterion_main!(benches);
