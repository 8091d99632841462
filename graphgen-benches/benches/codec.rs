//! Adjacency document encoding and decoding benchmarks.
//!
//! Builds one uniform random graph per size, then times serialization and
//! parsing of its document separately.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use graphgen_benches::{error::BenchSetupError, params::RandomBenchParams};
use graphgen_core::{Distribution, GeneratorBuilder, parse_document};

const SEED: u64 = 7;

const VERTEX_COUNTS: &[usize] = &[1_000, 10_000];

const EDGES_PER_VERTEX: usize = 8;

fn codec_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("document");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let params = RandomBenchParams {
            vertex_count,
            edges_per_vertex: EDGES_PER_VERTEX,
            distribution: Distribution::Uniform,
        };
        let graph = GeneratorBuilder::new()
            .with_seed(SEED)
            .build()
            .generate(&params.kind())?;
        let document = graph.serialize();
        parse_document(&document)?;

        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::new("serialize", params), &graph, |b, graph| {
            b.iter(|| graph.serialize());
        });
        group.bench_with_input(BenchmarkId::new("parse", params), &document, |b, document| {
            b.iter(|| parse_document(document));
        });
    }

    group.finish();
    Ok(())
}

fn codec(c: &mut Criterion) {
    if let Err(err) = codec_impl(c) {
        panic!("document benchmark setup failed: {err}");
    }
}

criterion_group!(benches, codec);
criterion_main!(benches);
