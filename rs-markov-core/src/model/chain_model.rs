use std::collections::HashMap;

use log::trace;
use rand::Rng;

use super::state::State;
use crate::error::{MarkovError, Result};

/// Character-level Markov chain of fixed order `k`.
///
/// The `ChainModel` maps every k-character prefix seen in the corpus to the
/// characters observed right after it.
///
/// # Responsibilities
/// - Record transitions from text windows
/// - Pick a random starting prefix
/// - Sample the next character for a prefix
///
/// # Invariants
/// - `prefix_length` is always >= 1
/// - Every key of `states` is exactly `prefix_length` characters long
/// - Every state has at least one continuation
/// - `prefixes` lists every key once, in first-seen order
#[derive(Clone, Debug)]
pub struct ChainModel {
	/// The order of the chain (characters per prefix)
	prefix_length: usize, // must be >= 1

	/// Mapping from a prefix to its state
	states: HashMap<String, State>,

	/// Keys in first-seen order, for reproducible start selection
	prefixes: Vec<String>,
}

impl ChainModel {
	/// Creates an empty model of order `prefix_length`.
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidPrefixLength`] if `prefix_length < 1`.
	pub fn new(prefix_length: usize) -> Result<Self> {
		if prefix_length < 1 {
			return Err(MarkovError::InvalidPrefixLength { value: prefix_length.to_string() });
		}
		Ok(Self {
			prefix_length,
			states: HashMap::new(),
			prefixes: Vec::new(),
		})
	}

	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(|state| state.continuations().len()).sum()
	}

	/// Prefixes in the order they were first seen.
	pub fn prefixes(&self) -> impl Iterator<Item = &str> {
		self.prefixes.iter().map(String::as_str)
	}

	/// Continuations recorded for `prefix`, or `None` if it was never seen.
	pub fn continuations(&self, prefix: &str) -> Option<&[char]> {
		self.states.get(prefix).map(State::continuations)
	}

	/// Adds every window of `text` to the model.
	///
	/// For each start index `i`, the `prefix_length` characters at `i` form
	/// the prefix and the character at `i + prefix_length` its continuation.
	/// Text shorter than `prefix_length + 1` characters adds nothing.
	///
	/// Returns the number of windows recorded.
	pub fn extend(&mut self, text: &str) -> usize {
		let chars: Vec<char> = text.chars().collect();
		self.extend_chars(&chars)
	}

	pub(crate) fn extend_chars(&mut self, chars: &[char]) -> usize {
		let mut recorded = 0;
		for window in chars.windows(self.prefix_length + 1) {
			// windows() never yields an empty slice here
			let Some((&next_char, prefix)) = window.split_last() else {
				continue;
			};
			self.add_transition(prefix.iter().collect(), next_char);
			recorded += 1;
		}
		recorded
	}

	fn add_transition(&mut self, prefix: String, next_char: char) {
		match self.states.get_mut(&prefix) {
			Some(state) => state.add_transition(next_char),
			None => {
				self.states.insert(prefix.clone(), State::new(&prefix, next_char));
				self.prefixes.push(prefix);
			}
		}
	}

	/// Returns a prefix chosen uniformly among all keys.
	///
	/// # Errors
	/// Returns [`MarkovError::EmptyModel`] if no prefix was recorded.
	pub fn random_prefix<R: Rng>(&self, rng: &mut R) -> Result<&str> {
		if self.prefixes.is_empty() {
			return Err(MarkovError::EmptyModel);
		}
		let index = rng.random_range(0..self.prefixes.len());
		Ok(&self.prefixes[index])
	}

	/// Samples the next character after `prefix`.
	///
	/// Each stored occurrence is equally likely, so a character observed
	/// twice is twice as likely as one observed once.
	///
	/// # Errors
	/// Returns [`MarkovError::ModelLookup`] if `prefix` has no continuation.
	pub fn sample<R: Rng>(&self, prefix: &str, rng: &mut R) -> Result<char> {
		let lookup_error = || MarkovError::ModelLookup { prefix: prefix.to_owned() };
		let state = self.states.get(prefix).ok_or_else(lookup_error)?;
		let next_char = state.predict(rng).ok_or_else(lookup_error)?;
		trace!("{:?} -> {next_char:?}", state.key());
		Ok(next_char)
	}
}
