//! Character-level Markov chain and text generation.
//!
//! - Fixed-order chain model (`ChainModel`)
//! - Multi-source accumulation (`ModelBuilder`)
//! - Internal state management (`State`)
//! - Lazy text generation (`Generator`)

/// Lazy generation of text from a built model.
pub mod generator;

/// Accumulation of several sources into one model, with a choice of
/// how source boundaries are treated.
pub mod builder;

/// Fixed-order chain model (`prefix_length >= 1`).
///
/// Handles window extraction, continuation recording,
/// random start selection and continuation sampling.
pub mod chain_model;

/// Internal representation of a single prefix and its continuations.
///
/// This module is not exposed publicly.
mod state;
