use crate::stage::Stage;
use crate::token::TokenProb;

/// Nucleus filtering: keeps the smallest probability-descending prefix whose
/// cumulative probability reaches the threshold `p`.
///
/// The stopping token is included even when it pushes the cumulative sum
/// above `p`, and at least one token is always kept, including at `p = 0`.
pub struct TopPFilter {
    p: f64,
}

impl TopPFilter {
    /// Create a top-p (nucleus) stage with the given probability threshold.
    pub fn new(p: f64) -> Self {
        Self { p }
    }
}

impl Stage for TopPFilter {
    fn name(&self) -> &'static str {
        "top_p"
    }

    fn apply(&self, dist: &mut Vec<TokenProb>) {
        if dist.is_empty() {
            return;
        }

        // Stable sort descending by probability; ties keep input order.
        dist.sort_by(|a, b| b.prob.partial_cmp(&a.prob).unwrap_or(std::cmp::Ordering::Equal));

        // Accumulate until the threshold is reached. The first iteration
        // always runs before the check, so the cutoff is never zero.
        let mut cumulative = 0.0f64;
        let mut cutoff = dist.len();
        for (i, t) in dist.iter().enumerate() {
            cumulative += t.prob;
            if cumulative >= self.p {
                cutoff = i + 1;
                break;
            }
        }

        dist.truncate(cutoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(vals: &[f64]) -> Vec<TokenProb> {
        vals.iter()
            .enumerate()
            .map(|(i, &p)| TokenProb::new(format!("t{}", i), p))
            .collect()
    }

    #[test]
    fn test_keeps_all_at_p_one() {
        let mut d = dist(&[0.5, 0.3, 0.2]);
        TopPFilter::new(1.0).apply(&mut d);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_keeps_one_when_head_covers_p() {
        let mut d = dist(&[0.85, 0.1, 0.05]);
        TopPFilter::new(0.5).apply(&mut d);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].label, "t0");
    }

    #[test]
    fn test_keeps_one_at_p_zero() {
        let mut d = dist(&[0.5, 0.3, 0.2]);
        TopPFilter::new(0.0).apply(&mut d);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_stopping_token_included() {
        // 0.4 + 0.3 = 0.7 >= 0.6, so the second token crosses the
        // threshold and is kept.
        let mut d = dist(&[0.4, 0.3, 0.2, 0.1]);
        TopPFilter::new(0.6).apply(&mut d);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_sorts_descending_before_accumulating() {
        let mut d = dist(&[0.1, 0.6, 0.3]);
        TopPFilter::new(0.65).apply(&mut d);
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].label, "t1");
        assert_eq!(d[1].label, "t2");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut d = dist(&[0.25, 0.25, 0.25, 0.25]);
        TopPFilter::new(0.5).apply(&mut d);
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].label, "t0");
        assert_eq!(d[1].label, "t1");
    }
}
