use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MarkovError, Result};

/// How line terminators of a source file enter the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreaks {
	/// Drop `\n`, `\r\n` and lone `\r` terminators and join the lines with
	/// nothing in between.
	#[default]
	Strip,
	/// Keep the file content unchanged.
	Keep,
}

/// Reads a whole text source into memory.
///
/// - The file handle is released before returning, on success or failure
/// - Invalid UTF-8 is reported as a read failure
/// - With [`LineBreaks::Strip`], lines are concatenated without separator
///
/// # Errors
/// Returns [`MarkovError::SourceRead`] if the file cannot be opened or read.
pub fn read_source<P: AsRef<Path>>(path: P, line_breaks: LineBreaks) -> Result<String> {
	let path = path.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| MarkovError::SourceRead { path: path.to_path_buf(), source })?;

	Ok(match line_breaks {
		LineBreaks::Keep => contents,
		LineBreaks::Strip => contents.split(['\r', '\n']).collect(),
	})
}
