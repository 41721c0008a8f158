//! `sv-render` - Terminal renderings for sampling-visualizer.
//!
//! Consumes a final distribution from `sv-pipeline` and renders it as:
//! - a labeled grid, five cells per row
//! - a horizontal bar chart scaled to the maximum kept probability
//! - a cumulative probability strip with a 0-100% ruler and legend
//!
//! All views share one formatting contract: percentages are shown with one
//! decimal place and cells are shaded green with alpha equal to the
//! probability.

pub mod axis;
pub mod bar;
pub mod color;
pub mod grid;

pub use axis::render_axis;
pub use bar::render_bar;
pub use color::{percent, Rgba};
pub use grid::render_grid;

use sv_pipeline::TokenProb;

/// Which rendering of the final distribution to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Grid,
    Bar,
    Axis,
}

/// Rendering knobs owned by the caller.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit truecolor ANSI escapes; plain shade characters otherwise.
    pub color: bool,
    /// Width in cells of bars and of the probability strip.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            width: 60,
        }
    }
}

/// Render the selected view of a final distribution.
pub fn render(dist: &[TokenProb], view: View, opts: &RenderOptions) -> String {
    match view {
        View::Grid => render_grid(dist, opts),
        View::Bar => render_bar(dist, opts),
        View::Axis => render_axis(dist, opts),
    }
}

/// The header lines every view is preceded by: the prompt and the count of
/// tokens that survived filtering.
pub fn header(prompt: &str, dist: &[TokenProb]) -> String {
    format!(
        "Prompt: {}\nActive tokens: {} (filtered by top-k and top-p)\n",
        prompt,
        dist.len()
    )
}
