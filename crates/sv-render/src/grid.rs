use sv_pipeline::TokenProb;

use crate::color::{block, percent};
use crate::RenderOptions;

/// Cells per grid row, as in the original layout.
const COLUMNS: usize = 5;

/// Render the distribution as a grid of label/percentage cells, five per
/// row, each cell carrying a probability-shaded swatch.
pub fn render_grid(dist: &[TokenProb], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for row in dist.chunks(COLUMNS) {
        for token in row {
            let swatch = block(token.prob, 2, opts.color);
            out.push_str(&format!(
                "{} {:<12}{:>6}   ",
                swatch,
                truncate_label(&token.label, 12),
                percent(token.prob)
            ));
        }
        // Trim row-trailing padding.
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let head: String = label.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
