use std::path::PathBuf;

use crate::error::{MarkovError, Result};

/// Validated generation parameters.
///
/// # Invariants
/// - `prefix_length >= 1`
/// - `output_length >= prefix_length`
/// - `sources` is not empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
	prefix_length: usize,
	output_length: usize,
	sources: Vec<PathBuf>,
}

impl GenerationSettings {
	/// Validates raw command-line values.
	///
	/// Checks run in this order: sources present, prefix length, output
	/// length, then prefix length against output length.
	///
	/// # Errors
	/// - [`MarkovError::MissingSources`] if `sources` is empty
	/// - [`MarkovError::InvalidPrefixLength`] if the prefix length is not an integer >= 1
	/// - [`MarkovError::InvalidOutputLength`] if the output length is not an integer >= 0
	/// - [`MarkovError::OutputShorterThanPrefix`] if prefix length > output length
	pub fn parse(prefix_length: &str, output_length: &str, sources: Vec<PathBuf>) -> Result<Self> {
		if sources.is_empty() {
			return Err(MarkovError::MissingSources);
		}

		let prefix_length = parse_length(prefix_length, 1)
			.ok_or_else(|| MarkovError::InvalidPrefixLength { value: prefix_length.to_owned() })?;
		let output_length = parse_length(output_length, 0)
			.ok_or_else(|| MarkovError::InvalidOutputLength { value: output_length.to_owned() })?;

		Self::new(prefix_length, output_length, sources)
	}

	/// Builds settings from already parsed lengths.
	///
	/// # Errors
	/// Same conditions as [`GenerationSettings::parse`], minus parsing.
	pub fn new(prefix_length: usize, output_length: usize, sources: Vec<PathBuf>) -> Result<Self> {
		if sources.is_empty() {
			return Err(MarkovError::MissingSources);
		}
		if prefix_length < 1 {
			return Err(MarkovError::InvalidPrefixLength { value: prefix_length.to_string() });
		}
		if prefix_length > output_length {
			return Err(MarkovError::OutputShorterThanPrefix { prefix_length, output_length });
		}
		Ok(Self { prefix_length, output_length, sources })
	}

	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	pub fn output_length(&self) -> usize {
		self.output_length
	}

	pub fn sources(&self) -> &[PathBuf] {
		&self.sources
	}
}

/// Parses a base-10 32-bit signed integer, `None` if malformed, out of
/// `i32` range or below `min`.
fn parse_length(value: &str, min: i32) -> Option<usize> {
	let parsed: i32 = value.parse().ok()?;
	if parsed < min {
		return None;
	}
	usize::try_from(parsed).ok()
}
