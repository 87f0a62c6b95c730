use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state of the chain model.
///
/// A `State` corresponds to a fixed k-character prefix (`key`) and stores
/// every character observed right after that prefix, in scan order.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations. Weights are kept
/// implicitly: a character seen N times is stored N times.
///
/// ## Invariants
/// - All continuations belong to the same `key`
/// - `continuations` is never empty (a state is created with its first one)
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (k-character prefix).
	key: String,
	/// Observed continuations, duplicates included.
	/// Example: ['e', 'a', 'e'] makes 'e' twice as likely as 'a'
	continuations: Vec<char>,
}

impl State {
	/// Creates a state for `key` with its first observed continuation.
	pub(crate) fn new(key: &str, first: char) -> Self {
		Self {
			key: key.to_owned(),
			continuations: vec![first],
		}
	}

	pub(crate) fn key(&self) -> &str {
		&self.key
	}

	/// Records one more occurrence of `next_char` after this prefix.
	pub(crate) fn add_transition(&mut self, next_char: char) {
		self.continuations.push(next_char);
	}

	/// All recorded continuations, in scan order.
	pub(crate) fn continuations(&self) -> &[char] {
		&self.continuations
	}

	/// Picks one stored occurrence uniformly at random.
	///
	/// Returns `None` only if the state has no continuations, which the
	/// constructor rules out.
	pub(crate) fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		self.continuations.choose(rng).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn new_state_holds_first_continuation() {
		let state = State::new("ab", 'c');
		assert_eq!(state.key(), "ab");
		assert_eq!(state.continuations(), &['c']);
	}

	#[test]
	fn duplicates_are_kept() {
		let mut state = State::new("ab", 'c');
		state.add_transition('d');
		state.add_transition('c');
		assert_eq!(state.continuations(), &['c', 'd', 'c']);
	}

	#[test]
	fn predict_follows_multiplicities() {
		let mut state = State::new("x", 'a');
		state.add_transition('a');
		state.add_transition('a');
		state.add_transition('b');

		let mut rng = StdRng::seed_from_u64(7);
		let draws = 8_000;
		let a_count = (0..draws)
			.filter(|_| state.predict(&mut rng) == Some('a'))
			.count();

		// Expected 3/4 of the draws
		let ratio = a_count as f64 / draws as f64;
		assert!((0.70..0.80).contains(&ratio), "ratio {ratio}");
	}
}
