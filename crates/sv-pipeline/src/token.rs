/// A candidate token paired with its raw, unnormalized score.
///
/// Scores come from a distribution source and need not sum to 1; they only
/// have to be non-negative with a positive total.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScore {
    pub label: String,
    pub score: f64,
}

impl TokenScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A candidate token paired with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenProb {
    pub label: String,
    pub prob: f64,
}

impl TokenProb {
    pub fn new(label: impl Into<String>, prob: f64) -> Self {
        Self {
            label: label.into(),
            prob,
        }
    }
}
