use sv_pipeline::TokenProb;

use crate::color::{block, percent};
use crate::RenderOptions;

/// Render the distribution as a horizontal bar chart.
///
/// Bars are scaled so the maximum kept probability fills the full
/// configured width; every bar is at least one cell wide.
pub fn render_bar(dist: &[TokenProb], opts: &RenderOptions) -> String {
    let max_prob = dist.iter().map(|t| t.prob).fold(0.0f64, f64::max);
    if max_prob <= 0.0 {
        return String::new();
    }

    let mut out = String::new();
    for token in dist {
        let len = ((token.prob / max_prob) * opts.width as f64).round() as usize;
        out.push_str(&format!(
            "{:<12} {} {}\n",
            token.label,
            block(token.prob, len.max(1), opts.color),
            percent(token.prob)
        ));
    }
    out
}
