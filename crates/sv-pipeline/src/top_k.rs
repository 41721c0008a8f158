use crate::stage::Stage;
use crate::token::TokenProb;

/// Keeps only the first K entries of the distribution, discarding the rest.
///
/// Truncation is positional: distribution sources list their intended top
/// candidate first, so no sort happens here. Probabilities are left
/// un-renormalized for the top-p stage.
pub struct TopKTruncate {
    k: usize,
}

impl TopKTruncate {
    /// Create a top-k stage that retains the first `k` entries.
    /// Values of `k` beyond the distribution length make this a no-op.
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl Stage for TopKTruncate {
    fn name(&self) -> &'static str {
        "top_k"
    }

    fn apply(&self, dist: &mut Vec<TokenProb>) {
        if self.k >= dist.len() {
            return;
        }
        dist.truncate(self.k);
    }
}
