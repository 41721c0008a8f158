use crate::error::{InputError, ParameterError, Result};
use crate::normalize::normalize;
use crate::renormalize::Renormalize;
use crate::stage::Stage;
use crate::token::{TokenProb, TokenScore};
use crate::top_k::TopKTruncate;
use crate::top_p::TopPFilter;

/// Externally owned sampling parameters.
///
/// Callers hold and mutate these (sliders, CLI flags, request fields); the
/// pipeline only reads them. Temperature is not here: it belongs to the
/// distribution source, which spreads raw score mass before sampling runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingParams {
    /// Keep only the first `top_k` candidates of the ranked list.
    pub top_k: usize,
    /// Cumulative probability threshold for nucleus filtering, in `[0, 1]`.
    pub top_p: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            top_k: 10,
            top_p: 1.0,
        }
    }
}

impl SamplingParams {
    pub fn new(top_k: usize, top_p: f64) -> Self {
        Self { top_k, top_p }
    }

    /// Check parameter domains: `top_k >= 1`, `top_p` in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.top_k < 1 {
            return Err(ParameterError::TopKZero.into());
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ParameterError::TopPOutOfRange(self.top_p).into());
        }
        Ok(())
    }
}

/// The working distribution as it looked after a named pipeline stage.
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub stage: &'static str,
    pub dist: Vec<TokenProb>,
}

/// Run the full sampling pipeline over a raw score table.
///
/// Fixed stage order: normalize, top-k truncation, top-p selection,
/// renormalization. The output is in probability-descending order, has
/// between 1 and `top_k` entries, and sums to 1.
pub fn sample(scores: &[TokenScore], params: &SamplingParams) -> Result<Vec<TokenProb>> {
    run(scores, params, |_, _| {})
}

/// Like [`sample`], but also returns the distribution after every stage.
pub fn sample_traced(scores: &[TokenScore], params: &SamplingParams) -> Result<Vec<StageSnapshot>> {
    let mut snapshots = Vec::with_capacity(4);
    run(scores, params, |stage, dist| {
        snapshots.push(StageSnapshot {
            stage,
            dist: dist.to_vec(),
        });
    })?;
    Ok(snapshots)
}

fn run(
    scores: &[TokenScore],
    params: &SamplingParams,
    mut observe: impl FnMut(&'static str, &[TokenProb]),
) -> Result<Vec<TokenProb>> {
    params.validate()?;

    let mut dist = normalize(scores)?;
    observe("normalize", &dist);

    let filters: [Box<dyn Stage>; 2] = [
        Box::new(TopKTruncate::new(params.top_k)),
        Box::new(TopPFilter::new(params.top_p)),
    ];
    for stage in &filters {
        stage.apply(&mut dist);
        observe(stage.name(), &dist);
    }

    // A source that puts all its mass past the top-k cut leaves nothing to
    // renormalize over.
    let total: f64 = dist.iter().map(|t| t.prob).sum();
    if total <= 0.0 {
        return Err(InputError::ZeroTruncatedMass.into());
    }

    let renorm = Renormalize;
    renorm.apply(&mut dist);
    observe(renorm.name(), &dist);

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SampleError;
    use approx::assert_relative_eq;

    fn scores(vals: &[f64]) -> Vec<TokenScore> {
        vals.iter()
            .enumerate()
            .map(|(i, &s)| TokenScore::new(format!("t{}", i), s))
            .collect()
    }

    fn probs_of(dist: &[TokenProb]) -> Vec<f64> {
        dist.iter().map(|t| t.prob).collect()
    }

    #[test]
    fn test_final_distribution_sums_to_one() {
        let input = scores(&[2.0, 1.5, 1.0, 0.5, 0.25]);
        for (k, p) in [(5, 1.0), (3, 0.9), (2, 0.4), (1, 1.0), (5, 0.0)] {
            let out = sample(&input, &SamplingParams::new(k, p)).unwrap();
            let sum: f64 = out.iter().map(|t| t.prob).sum();
            assert_relative_eq!(sum, 1.0, max_relative = 1e-9);
            assert!(!out.is_empty() && out.len() <= k);
        }
    }

    #[test]
    fn test_truncate_then_renormalize() {
        // rawScores already sum to 1; truncation to 3 leaves 0.98 of mass,
        // renormalization divides by it.
        let input = scores(&[0.85, 0.1, 0.03, 0.01, 0.01]);
        let out = sample(&input, &SamplingParams::new(3, 1.0)).unwrap();
        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[0].prob, 0.85 / 0.98, max_relative = 1e-9);
        assert_relative_eq!(out[1].prob, 0.10 / 0.98, max_relative = 1e-9);
        assert_relative_eq!(out[2].prob, 0.03 / 0.98, max_relative = 1e-9);
    }

    #[test]
    fn test_small_top_p_keeps_single_token() {
        // After truncation the head already holds 0.85/0.98 of the mass,
        // which covers p = 0.5 on its own.
        let input = scores(&[0.85, 0.1, 0.03, 0.01, 0.01]);
        let out = sample(&input, &SamplingParams::new(3, 0.5)).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "t0");
        assert_relative_eq!(out[0].prob, 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_top_k_one_forces_single_token() {
        let input = scores(&[0.85, 0.1, 0.03, 0.01, 0.01]);
        for p in [0.0, 0.3, 1.0] {
            let out = sample(&input, &SamplingParams::new(1, p)).unwrap();
            assert_eq!(out.len(), 1);
            assert_relative_eq!(out[0].prob, 1.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_top_k_beyond_len_is_noop() {
        let input = scores(&[0.4, 0.3, 0.2, 0.1]);
        let full = sample(&input, &SamplingParams::new(4, 1.0)).unwrap();
        let clamped = sample(&input, &SamplingParams::new(100, 1.0)).unwrap();
        assert_eq!(probs_of(&full), probs_of(&clamped));
        assert_eq!(full.len(), 4);
    }

    #[test]
    fn test_top_p_one_keeps_whole_truncated_set() {
        let input = scores(&[0.4, 0.3, 0.2, 0.1]);
        let out = sample(&input, &SamplingParams::new(3, 1.0)).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_top_p_zero_keeps_one() {
        let input = scores(&[0.4, 0.3, 0.2, 0.1]);
        let out = sample(&input, &SamplingParams::new(4, 0.0)).unwrap();
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].prob, 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_output_in_probability_descending_order() {
        // Input deliberately not ranked: the top-p stage establishes the
        // display order.
        let input = scores(&[0.1, 0.6, 0.3]);
        let out = sample(&input, &SamplingParams::new(3, 1.0)).unwrap();
        let labels: Vec<&str> = out.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["t1", "t2", "t0"]);
    }

    #[test]
    fn test_idempotent_and_deterministic() {
        let input = scores(&[5.0, 2.0, 1.0, 1.0, 0.5]);
        let params = SamplingParams::new(4, 0.8);
        let a = sample(&input, &params).unwrap();
        let b = sample(&input, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unnormalized_input_accepted() {
        let input = scores(&[8.5, 1.0, 0.3, 0.1, 0.1]);
        let out = sample(&input, &SamplingParams::new(3, 1.0)).unwrap();
        assert_relative_eq!(out[0].prob, 0.85 / 0.98, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_top_k_rejected() {
        let input = scores(&[0.5, 0.5]);
        let err = sample(&input, &SamplingParams::new(0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidParameter(ParameterError::TopKZero)
        );
    }

    #[test]
    fn test_invalid_top_p_rejected() {
        let input = scores(&[0.5, 0.5]);
        for p in [-0.1, 1.1, f64::NAN] {
            let err = sample(&input, &SamplingParams::new(2, p)).unwrap_err();
            assert!(matches!(
                err,
                SampleError::InvalidParameter(ParameterError::TopPOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_invalid_input_rejected_before_transforms() {
        let err = sample(&[], &SamplingParams::default()).unwrap_err();
        assert_eq!(err, SampleError::InvalidInput(InputError::Empty));

        let err = sample(&scores(&[1.0, -1.0]), &SamplingParams::default()).unwrap_err();
        assert!(matches!(err, SampleError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_mass_after_truncation_rejected() {
        // All mass sits past the top-k cut.
        let input = scores(&[0.0, 0.0, 1.0]);
        let err = sample(&input, &SamplingParams::new(2, 1.0)).unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidInput(InputError::ZeroTruncatedMass)
        );
    }

    #[test]
    fn test_traced_stages_in_fixed_order() {
        let input = scores(&[0.85, 0.1, 0.03, 0.01, 0.01]);
        let snaps = sample_traced(&input, &SamplingParams::new(3, 0.5)).unwrap();
        let names: Vec<&str> = snaps.iter().map(|s| s.stage).collect();
        assert_eq!(names, vec!["normalize", "top_k", "top_p", "renormalize"]);
        assert_eq!(snaps[0].dist.len(), 5);
        assert_eq!(snaps[1].dist.len(), 3);
        assert_eq!(snaps[2].dist.len(), 1);
        assert_eq!(snaps[3].dist.len(), 1);
    }

    #[test]
    fn test_traced_final_matches_sample() {
        let input = scores(&[0.4, 0.3, 0.2, 0.1]);
        let params = SamplingParams::new(3, 0.8);
        let snaps = sample_traced(&input, &params).unwrap();
        let direct = sample(&input, &params).unwrap();
        assert_eq!(snaps.last().unwrap().dist, direct);
    }

    #[test]
    fn test_default_params_pass_everything_through() {
        let input = scores(&[0.4, 0.3, 0.2, 0.1]);
        let out = sample(&input, &SamplingParams::default()).unwrap();
        assert_eq!(out.len(), 4);
        let sum: f64 = out.iter().map(|t| t.prob).sum();
        assert_relative_eq!(sum, 1.0, max_relative = 1e-9);
    }
}
