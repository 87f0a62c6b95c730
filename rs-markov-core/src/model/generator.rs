use std::vec;

use log::debug;
use rand::Rng;

use super::chain_model::ChainModel;
use crate::error::{MarkovError, Result};

/// Lazy character generator walking a [`ChainModel`].
///
/// # Behavior
/// - Starts from a prefix chosen uniformly among the model keys and yields
///   its characters first
/// - Then samples one continuation per step and slides the prefix by one
///   character
/// - Stops after exactly `output_length` characters
///
/// A failed lookup is yielded once as `Err`, after which the iterator is
/// exhausted.
#[derive(Debug)]
pub struct Generator<'m, R: Rng> {
	model: &'m ChainModel,
	rng: R,
	/// Current prefix, always `prefix_length` characters
	prefix: String,
	/// Start prefix characters not yet yielded
	pending: vec::IntoIter<char>,
	remaining: usize,
	halted: bool,
}

impl<'m, R: Rng> Generator<'m, R> {
	/// Prepares a generation of `output_length` characters.
	///
	/// # Errors
	/// - [`MarkovError::OutputShorterThanPrefix`] if `output_length` is lower
	///   than the model prefix length
	/// - [`MarkovError::EmptyModel`] if the model has no prefix
	pub fn new(model: &'m ChainModel, output_length: usize, mut rng: R) -> Result<Self> {
		let prefix_length = model.prefix_length();
		if output_length < prefix_length {
			return Err(MarkovError::OutputShorterThanPrefix { prefix_length, output_length });
		}

		let prefix = model.random_prefix(&mut rng)?.to_owned();
		debug!("Starting from prefix {prefix:?}, {output_length} characters to emit");

		Ok(Self {
			model,
			rng,
			pending: prefix.chars().collect::<Vec<_>>().into_iter(),
			prefix,
			remaining: output_length,
			halted: false,
		})
	}

	/// The prefix the next sample will be drawn from.
	pub fn current_prefix(&self) -> &str {
		&self.prefix
	}

	fn step(&mut self) -> Result<char> {
		let next_char = self.model.sample(&self.prefix, &mut self.rng)?;
		self.prefix.remove(0);
		self.prefix.push(next_char);
		Ok(next_char)
	}
}

impl<R: Rng> Iterator for Generator<'_, R> {
	type Item = Result<char>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.halted || self.remaining == 0 {
			return None;
		}

		let next = match self.pending.next() {
			Some(c) => Ok(c),
			None => self.step(),
		};
		match next {
			Ok(_) => self.remaining -= 1,
			Err(_) => self.halted = true,
		}
		Some(next)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.halted {
			(0, Some(0))
		} else {
			(0, Some(self.remaining))
		}
	}
}

/// Generates exactly `output_length` characters from `model`.
///
/// Nothing is returned unless the whole text could be produced.
///
/// # Errors
/// See [`Generator::new`], plus [`MarkovError::ModelLookup`] if sampling
/// reaches a prefix the model does not know.
pub fn generate<R: Rng>(model: &ChainModel, output_length: usize, rng: R) -> Result<String> {
	Generator::new(model, output_length, rng)?.collect()
}
