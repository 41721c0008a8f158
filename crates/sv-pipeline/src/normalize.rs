use crate::error::{InputError, Result};
use crate::token::{TokenProb, TokenScore};

/// Validate a raw score table and return its total mass.
///
/// Rejects an empty table, non-finite or negative scores, and a zero total.
pub(crate) fn validate(scores: &[TokenScore]) -> Result<f64> {
    if scores.is_empty() {
        return Err(InputError::Empty.into());
    }
    for t in scores {
        if !t.score.is_finite() {
            return Err(InputError::NonFiniteScore {
                label: t.label.clone(),
            }
            .into());
        }
        if t.score < 0.0 {
            return Err(InputError::NegativeScore {
                label: t.label.clone(),
                score: t.score,
            }
            .into());
        }
    }
    let total: f64 = scores.iter().map(|t| t.score).sum();
    if total <= 0.0 {
        return Err(InputError::ZeroTotal.into());
    }
    Ok(total)
}

/// Convert raw scores into probabilities that sum to 1, preserving order.
pub fn normalize(scores: &[TokenScore]) -> Result<Vec<TokenProb>> {
    let total = validate(scores)?;
    Ok(scores
        .iter()
        .map(|t| TokenProb::new(t.label.clone(), t.score / total))
        .collect())
}
