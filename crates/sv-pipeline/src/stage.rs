use crate::token::TokenProb;

/// Trait for pipeline stages that transform a working distribution in place.
pub trait Stage: Send + Sync {
    /// Returns the name of this stage.
    fn name(&self) -> &'static str;

    /// Transform the distribution in place (filtering, rescaling, etc.)
    fn apply(&self, dist: &mut Vec<TokenProb>);
}
