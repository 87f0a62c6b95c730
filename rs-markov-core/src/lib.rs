//! Character-level Markov chain text generation library.
//!
//! This crate provides:
//! - Order-k character chain models built from one or more texts
//! - Random text generation from a built model
//! - Validation of generation settings
//! - Source file loading
//!
//! Every fallible operation returns [`Result`], whose error carries the exit
//! status a front-end should report.

/// Chain model, model builder and generator.
pub mod model;

/// Source file loading.
pub mod io;

/// Validation of prefix length, output length and sources.
pub mod settings;

/// Error taxonomy.
pub mod error;

pub use error::{MarkovError, Result};
pub use io::LineBreaks;
pub use model::builder::{BuildOptions, ModelBuilder, SourceJoin};
pub use model::chain_model::ChainModel;
pub use model::generator::{Generator, generate};
pub use settings::GenerationSettings;
