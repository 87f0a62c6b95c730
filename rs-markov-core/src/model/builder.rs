use std::path::Path;

use log::{debug, info};

use super::chain_model::ChainModel;
use crate::error::Result;
use crate::io::{LineBreaks, read_source};

/// How consecutive sources are joined into the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceJoin {
	/// Sources form one continuous corpus: windows may straddle the end of a
	/// source and the start of the next one.
	#[default]
	Concatenate,
	/// Each source is scanned on its own.
	Isolate,
}

/// Options controlling how sources are turned into a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
	pub join: SourceJoin,
	pub line_breaks: LineBreaks,
}

/// Accumulates sources into a single [`ChainModel`].
///
/// The builder owns the model while sources are fed and hands it out with
/// [`ModelBuilder::finish`].
///
/// # Behavior
/// - In [`SourceJoin::Concatenate`] mode, the last `prefix_length`
///   characters fed so far are carried over and prepended to the next source,
///   so boundary windows are recorded exactly once.
/// - In [`SourceJoin::Isolate`] mode, nothing is carried over.
#[derive(Debug)]
pub struct ModelBuilder {
	model: ChainModel,
	options: BuildOptions,
	/// Tail of the corpus fed so far (at most `prefix_length` characters)
	carry: Vec<char>,
	sources: usize,
}

impl ModelBuilder {
	/// Creates a builder for a model of order `prefix_length`.
	///
	/// # Errors
	/// Returns an error if `prefix_length < 1`.
	pub fn new(prefix_length: usize, options: BuildOptions) -> Result<Self> {
		Ok(Self {
			model: ChainModel::new(prefix_length)?,
			options,
			carry: Vec::new(),
			sources: 0,
		})
	}

	/// Number of sources fed so far.
	pub fn sources(&self) -> usize {
		self.sources
	}

	/// Read-only view of the model being built.
	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Feeds one source text, returns the number of windows recorded.
	pub fn feed_text(&mut self, text: &str) -> usize {
		self.sources += 1;
		let recorded = match self.options.join {
			SourceJoin::Isolate => self.model.extend(text),
			SourceJoin::Concatenate => {
				let mut chars = std::mem::take(&mut self.carry);
				chars.extend(text.chars());
				let recorded = self.model.extend_chars(&chars);

				let cut = chars.len().saturating_sub(self.model.prefix_length());
				chars.drain(..cut);
				self.carry = chars;
				recorded
			}
		};
		debug!("Source #{} added {} windows ({} prefixes so far)", self.sources, recorded, self.model.len());
		recorded
	}

	/// Reads a file and feeds its content.
	///
	/// # Errors
	/// Returns [`crate::MarkovError::SourceRead`] if the file cannot be read.
	/// The model is left untouched in that case.
	pub fn feed_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
		let path = path.as_ref();
		let text = read_source(path, self.options.line_breaks)?;
		debug!("Read {} ({} bytes)", path.display(), text.len());
		Ok(self.feed_text(&text))
	}

	/// Returns the finished model.
	pub fn finish(self) -> ChainModel {
		info!(
			"Model built from {} source(s): {} prefixes, {} transitions",
			self.sources,
			self.model.len(),
			self.model.transition_count()
		);
		self.model
	}
}
