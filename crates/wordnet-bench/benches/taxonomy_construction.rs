//! Taxonomy construction benchmarks: record parsing and full build.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wordnet_bench::{SizeTier, generate_taxonomy};
use wordnet_core::{Taxonomy, parse_digraph, parse_hypernyms, parse_synsets};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("taxonomy_construction");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
        ("XL", SizeTier::XLarge),
    ] {
        let generated = generate_taxonomy(&tier.config(42));
        let bytes = (generated.synsets.len() + generated.hypernyms.len()) as u64;
        group.throughput(Throughput::Bytes(bytes));

        group.bench_with_input(
            BenchmarkId::new("parse_synsets", name),
            &generated,
            |b, generated| {
                b.iter(|| parse_synsets(&generated.synsets).expect("parses"));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parse_hypernyms", name),
            &generated,
            |b, generated| {
                b.iter(|| parse_hypernyms(&generated.hypernyms).expect("parses"));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("from_records", name),
            &generated,
            |b, generated| {
                b.iter(|| {
                    Taxonomy::from_records(&generated.synsets, &generated.hypernyms)
                        .expect("builds")
                });
            },
        );

        let digraph = generated.digraph_text();
        group.bench_with_input(BenchmarkId::new("parse_digraph", name), &digraph, |b, text| {
            b.iter(|| parse_digraph(text).expect("parses"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction);
criterion_main!(benches);
