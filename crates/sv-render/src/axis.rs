use sv_pipeline::TokenProb;

use crate::color::{block, percent};
use crate::RenderOptions;

/// Render the distribution as a cumulative probability strip.
///
/// Each token occupies a contiguous segment of the 0-100% axis proportional
/// to its probability. Below the strip sits a ruler with major ticks every
/// 10% (labeled) and minor ticks every 5%, then a legend line per token.
pub fn render_axis(dist: &[TokenProb], opts: &RenderOptions) -> String {
    let width = opts.width.max(20);

    let mut out = String::from("Probability distribution (0% - 100%)\n");

    // Strip: segment boundaries from the running cumulative probability.
    let mut cumulative = 0.0f64;
    for token in dist {
        let start = (cumulative * width as f64).round() as usize;
        cumulative += token.prob;
        let end = ((cumulative * width as f64).round() as usize).min(width);
        out.push_str(&block(token.prob, end.saturating_sub(start), opts.color));
    }
    out.push('\n');

    out.push_str(&ruler(width));
    out.push_str(&labels(width));

    out.push('\n');
    for token in dist {
        out.push_str(&format!(
            "{} {:<12} {}\n",
            block(token.prob, 2, opts.color),
            token.label,
            percent(token.prob)
        ));
    }
    out
}

fn tick_position(pct: usize, width: usize) -> usize {
    (pct * width + 50) / 100
}

fn ruler(width: usize) -> String {
    let mut line: Vec<char> = vec!['─'; width + 1];
    for pct in (5..100).step_by(10) {
        line[tick_position(pct, width)] = '┴';
    }
    for pct in (0..=100).step_by(10) {
        line[tick_position(pct, width)] = '┼';
    }
    let mut s: String = line.into_iter().collect();
    s.push('\n');
    s
}

fn labels(width: usize) -> String {
    let mut line: Vec<char> = vec![' '; width + 6];
    let mut cursor = 0usize;
    for pct in (0..=100).step_by(10) {
        let text = format!("{}%", pct);
        let center = tick_position(pct, width);
        let start = center.saturating_sub(text.len() / 2);
        // Skip a label that would collide with the previous one.
        if start < cursor {
            continue;
        }
        for (i, c) in text.chars().enumerate() {
            line[start + i] = c;
        }
        cursor = start + text.len() + 1;
    }
    let mut s: String = line.into_iter().collect();
    while s.ends_with(' ') {
        s.pop();
    }
    s.push('\n');
    s
}
