//! Cost of building a chain model and of walking it

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{ChainModel, generate};
use std::hint::black_box;

const CORPUS: &str = "It was the best of times, it was the worst of times, it was the age of \
	wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
	incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
	of hope, it was the winter of despair.";

fn corpus(repeat: usize) -> String {
	CORPUS.repeat(repeat)
}

/// Measures model construction for growing prefix lengths
fn bench_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("build_model");
	let text = corpus(50);

	for prefix_length in [1, 3, 6] {
		group.bench_with_input(BenchmarkId::from_parameter(prefix_length), &prefix_length, |b, &k| {
			b.iter(|| {
				let Ok(mut model) = ChainModel::new(k) else {
					return;
				};
				black_box(model.extend(black_box(&text)));
			});
		});
	}
	group.finish();
}

/// Measures generation of 10k characters from a prebuilt model
fn bench_generate(c: &mut Criterion) {
	let mut group = c.benchmark_group("generate");
	let text = corpus(50);

	for prefix_length in [1, 3, 6] {
		let Ok(mut model) = ChainModel::new(prefix_length) else {
			continue;
		};
		model.extend(&text);

		group.bench_with_input(BenchmarkId::from_parameter(prefix_length), &model, |b, model| {
			b.iter(|| black_box(generate(model, 10_000, StdRng::seed_from_u64(1234)).ok()));
		});
	}
	group.finish();
}

criterion_group!(benches, bench_build, bench_generate);
criterion_main!(benches);
