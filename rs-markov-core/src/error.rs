use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating settings, building a model or generating text.
///
/// Every variant is fatal for a run. The binary maps each one to a process
/// exit status with [`MarkovError::exit_code`].
#[derive(Debug, Error)]
pub enum MarkovError {
	/// Prefix length is not an integer or is lower than 1.
	#[error("Invalid prefix length '{value}': expected an integer >= 1")]
	InvalidPrefixLength { value: String },

	/// Output length is not an integer or is negative.
	#[error("Invalid output length '{value}': expected an integer >= 0")]
	InvalidOutputLength { value: String },

	/// No text source was given.
	#[error("At least one text source is required")]
	MissingSources,

	/// Output length is lower than the prefix length.
	#[error("Prefix length {prefix_length} is greater than output length {output_length}")]
	OutputShorterThanPrefix {
		prefix_length: usize,
		output_length: usize,
	},

	/// A text source could not be opened or read.
	#[error("Failed to read source '{}': {source}", path.display())]
	SourceRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Sampling reached a prefix with no recorded continuation.
	#[error("No continuation recorded for prefix {prefix:?}")]
	ModelLookup { prefix: String },

	/// Every source was too short to produce a single prefix.
	#[error("Model is empty: no source is longer than the prefix length")]
	EmptyModel,

	/// Generated text could not be written out.
	#[error("Failed to write generated text: {source}")]
	Output {
		#[source]
		source: io::Error,
	},
}

impl MarkovError {
	/// Process exit status for this error.
	///
	/// - `1`: bad arguments, unreadable source, failed write
	/// - `2`: prefix longer than output, or the model cannot produce text
	pub fn exit_code(&self) -> u8 {
		match self {
			Self::InvalidPrefixLength { .. }
			| Self::InvalidOutputLength { .. }
			| Self::MissingSources
			| Self::SourceRead { .. }
			| Self::Output { .. } => 1,
			Self::OutputShorterThanPrefix { .. } | Self::ModelLookup { .. } | Self::EmptyModel => 2,
		}
	}
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;
