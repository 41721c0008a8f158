//! `sv-pipeline` - Token sampling pipeline for sampling-visualizer.
//!
//! This crate provides:
//! - `TokenScore` / `TokenProb` candidate types
//! - A `Stage` trait for in-place distribution transforms
//! - Top-k truncation and top-p (nucleus) filtering stages
//! - The fixed `sample` pipeline: normalize -> top-k -> top-p -> renormalize
//! - A seeded weighted `draw` from a final distribution

pub mod draw;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod renormalize;
pub mod stage;
pub mod token;
pub mod top_k;
pub mod top_p;

// Re-export primary types at the crate root for convenience.
pub use draw::draw;
pub use error::{InputError, ParameterError, Result, SampleError};
pub use normalize::normalize;
pub use pipeline::{sample, sample_traced, SamplingParams, StageSnapshot};
pub use renormalize::Renormalize;
pub use stage::Stage;
pub use token::{TokenProb, TokenScore};
pub use top_k::TopKTruncate;
pub use top_p::TopPFilter;
