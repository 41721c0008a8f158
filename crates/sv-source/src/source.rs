use sv_pipeline::TokenScore;

use crate::error::Result;

/// Supplier of raw score tables for the sampling pipeline.
///
/// Implementations must return a non-empty table of non-negative scores with
/// a positive total, listing the intended top candidate first: the
/// pipeline's top-k stage truncates positionally and relies on that ranking.
pub trait DistributionSource {
    /// The prompt text the candidates complete.
    fn prompt(&self) -> &str;

    /// Raw candidate scores at the given temperature.
    fn raw_scores(&self, temperature: f64) -> Result<Vec<TokenScore>>;
}
