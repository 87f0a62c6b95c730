//! Command-line surface of the generator

use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use rs_markov_core::{BuildOptions, GenerationSettings, LineBreaks, SourceJoin};

/// Log filter used when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments.
///
/// Lengths are kept as raw strings so that malformed and negative values
/// reach [`GenerationSettings::parse`] and get its exit statuses.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version)]
#[command(about = "Generate random text from a character-level Markov chain")]
pub struct Cli {
	/// Number of characters in each prefix (>= 1)
	#[arg(value_name = "PREFIX_LENGTH", allow_negative_numbers = true)]
	pub prefix_length: String,

	/// Number of characters to generate (>= PREFIX_LENGTH)
	#[arg(value_name = "OUTPUT_LENGTH", allow_negative_numbers = true)]
	pub output_length: String,

	/// Text files to learn from, in corpus order
	#[arg(value_name = "SOURCE", required = true)]
	pub sources: Vec<PathBuf>,

	/// Random seed for reproducible output
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Do not let prefixes straddle two sources
	#[arg(long)]
	pub isolate_sources: bool,

	/// Keep line terminators instead of joining lines
	#[arg(long)]
	pub keep_line_breaks: bool,

	/// Raise log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	/// Validates the positional arguments.
	///
	/// # Errors
	/// Returns the validation error of [`GenerationSettings::parse`].
	pub fn settings(&self) -> rs_markov_core::Result<GenerationSettings> {
		GenerationSettings::parse(&self.prefix_length, &self.output_length, self.sources.clone())
	}

	pub fn build_options(&self) -> BuildOptions {
		BuildOptions {
			join: if self.isolate_sources { SourceJoin::Isolate } else { SourceJoin::Concatenate },
			line_breaks: if self.keep_line_breaks { LineBreaks::Keep } else { LineBreaks::Strip },
		}
	}

	/// Level forced by `-v` flags, `None` to defer to `RUST_LOG`.
	pub fn log_level(&self) -> Option<LevelFilter> {
		match self.verbose {
			0 => None,
			1 => Some(LevelFilter::Info),
			2 => Some(LevelFilter::Debug),
			_ => Some(LevelFilter::Trace),
		}
	}
}

/// Exit status for a clap parse outcome, given the result of printing it.
///
/// Help and version requests succeed unless they could not be printed;
/// every usage error is an argument error.
pub fn usage_exit_code(kind: ErrorKind, printed: io::Result<()>) -> u8 {
	match (kind, printed) {
		(_, Err(_)) => 1,
		(ErrorKind::DisplayHelp | ErrorKind::DisplayVersion, Ok(())) => 0,
		(_, Ok(())) => 1,
	}
}
