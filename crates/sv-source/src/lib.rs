//! `sv-source` - Bundled example prompts and score tables for sampling-visualizer.
//!
//! A distribution source supplies, for a prompt and a temperature, a fixed
//! ordered list of candidate tokens with raw scores, intended top candidate
//! first. Three examples ship with the visualizer: a math completion, a
//! nursery-rhyme completion, and an open-ended completion.

pub mod error;
pub mod example;
pub mod source;

pub use error::{Result, SourceError};
pub use example::Example;
pub use source::DistributionSource;
