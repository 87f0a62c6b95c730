//! Properties of model building and generation over arbitrary texts

use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{BuildOptions, ChainModel, MarkovError, ModelBuilder, SourceJoin, generate};

/// Counts every (prefix, continuation) window of `chars` by brute force.
fn window_counts(chars: &[char], prefix_length: usize) -> HashMap<(String, char), usize> {
	let mut counts = HashMap::new();
	if chars.len() <= prefix_length {
		return counts;
	}
	for i in 0..chars.len() - prefix_length {
		let prefix: String = chars[i..i + prefix_length].iter().collect();
		*counts.entry((prefix, chars[i + prefix_length])).or_insert(0) += 1;
	}
	counts
}

fn model_counts(model: &ChainModel) -> HashMap<(String, char), usize> {
	let mut counts = HashMap::new();
	for prefix in model.prefixes() {
		for &next_char in model.continuations(prefix).unwrap_or_default() {
			*counts.entry((prefix.to_owned(), next_char)).or_insert(0) += 1;
		}
	}
	counts
}

fn build(prefix_length: usize, join: SourceJoin, sources: &[&str]) -> ChainModel {
	let options = BuildOptions { join, ..BuildOptions::default() };
	let mut builder = ModelBuilder::new(prefix_length, options).unwrap();
	for source in sources {
		builder.feed_text(source);
	}
	builder.finish()
}

proptest! {
	#[test]
	fn multiplicities_match_window_occurrences(text in "[abc ]{0,60}", prefix_length in 1usize..5) {
		let mut model = ChainModel::new(prefix_length).unwrap();
		model.extend(&text);

		let chars: Vec<char> = text.chars().collect();
		prop_assert_eq!(model_counts(&model), window_counts(&chars, prefix_length));
	}

	#[test]
	fn every_key_has_the_prefix_length_and_a_continuation(text in "\\PC{0,40}", prefix_length in 1usize..4) {
		let mut model = ChainModel::new(prefix_length).unwrap();
		model.extend(&text);

		for prefix in model.prefixes() {
			prop_assert_eq!(prefix.chars().count(), prefix_length);
			prop_assert!(!model.continuations(prefix).unwrap_or_default().is_empty());
		}
	}

	#[test]
	fn generated_text_has_requested_length(
		text in "[a-e]{6,50}",
		prefix_length in 1usize..4,
		extra in 0usize..200,
		seed in any::<u64>(),
	) {
		// Close the text on itself so that every prefix has a continuation
		let cyclic: String = text.chars().chain(text.chars().take(prefix_length)).collect();
		let mut model = ChainModel::new(prefix_length).unwrap();
		model.extend(&cyclic);

		let output_length = prefix_length + extra;
		let output = generate(&model, output_length, StdRng::seed_from_u64(seed)).unwrap();
		prop_assert_eq!(output.chars().count(), output_length);
	}

	#[test]
	fn generated_text_only_uses_recorded_transitions(
		text in "[a-d]{6,40}",
		prefix_length in 1usize..3,
		seed in any::<u64>(),
	) {
		let cyclic: String = text.chars().chain(text.chars().take(prefix_length)).collect();
		let mut model = ChainModel::new(prefix_length).unwrap();
		model.extend(&cyclic);

		let output: Vec<char> = generate(&model, 60, StdRng::seed_from_u64(seed)).unwrap().chars().collect();
		let start: String = output[..prefix_length].iter().collect();
		prop_assert!(model.continuations(&start).is_some());
		for window in output.windows(prefix_length + 1) {
			let prefix: String = window[..prefix_length].iter().collect();
			let recorded = model.continuations(&prefix).unwrap_or_default();
			prop_assert!(recorded.contains(&window[prefix_length]));
		}
	}

	#[test]
	fn isolated_sources_are_order_independent(
		first in "[xyz]{0,30}",
		second in "[xyz]{0,30}",
		prefix_length in 1usize..4,
	) {
		let forward = build(prefix_length, SourceJoin::Isolate, &[&first, &second]);
		let backward = build(prefix_length, SourceJoin::Isolate, &[&second, &first]);
		prop_assert_eq!(model_counts(&forward), model_counts(&backward));
	}

	#[test]
	fn concatenated_sources_equal_the_joined_corpus(
		parts in prop::collection::vec("[pq]{0,8}", 1..6),
		prefix_length in 1usize..4,
	) {
		let sources: Vec<&str> = parts.iter().map(String::as_str).collect();
		let model = build(prefix_length, SourceJoin::Concatenate, &sources);

		let corpus: Vec<char> = parts.concat().chars().collect();
		prop_assert_eq!(model_counts(&model), window_counts(&corpus, prefix_length));
	}
}

#[test]
fn concatenation_only_differs_from_isolation_at_boundaries() {
	let forward = build(2, SourceJoin::Concatenate, &["hello", "world"]);
	let backward = build(2, SourceJoin::Concatenate, &["world", "hello"]);

	let forward_counts = model_counts(&forward);
	let backward_counts = model_counts(&backward);
	// "lo"+'w' and "ow"+'o' straddle hello|world
	assert_eq!(forward_counts.get(&("lo".to_owned(), 'w')), Some(&1));
	assert_eq!(backward_counts.get(&("lo".to_owned(), 'w')), None);
	// "he"+'l' comes from a single source in both orders
	assert_eq!(forward_counts.get(&("he".to_owned(), 'l')), backward_counts.get(&("he".to_owned(), 'l')));
}

#[test]
fn too_short_single_source_leaves_model_empty() {
	let model = build(1, SourceJoin::Concatenate, &["z"]);
	assert!(model.is_empty());
	assert!(matches!(
		generate(&model, 1, StdRng::seed_from_u64(0)),
		Err(MarkovError::EmptyModel)
	));
}

#[test]
fn abab_model_matches_expected_windows() {
	let model = build(2, SourceJoin::Concatenate, &["abab"]);
	assert_eq!(model.len(), 2);
	assert_eq!(model.continuations("ab"), Some(&['a'][..]));
	assert_eq!(model.continuations("ba"), Some(&['b'][..]));
}
