use crate::stage::Stage;
use crate::token::TokenProb;

/// Rescales the kept probabilities so they sum to 1 again.
///
/// A distribution with no remaining mass is left untouched; the pipeline
/// entry point rejects that case before this stage runs.
pub struct Renormalize;

impl Stage for Renormalize {
    fn name(&self) -> &'static str {
        "renormalize"
    }

    fn apply(&self, dist: &mut Vec<TokenProb>) {
        let total: f64 = dist.iter().map(|t| t.prob).sum();
        if total <= 0.0 {
            return;
        }
        for t in dist.iter_mut() {
            t.prob /= total;
        }
    }
}
