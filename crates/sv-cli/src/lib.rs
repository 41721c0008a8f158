//! # sv-cli
//!
//! Command-line front end for sampling-visualizer.
//!
//! Wires: distribution source (bundled example or JSON score file) ->
//! sampling pipeline -> terminal rendering. One invocation is one discrete
//! parameter change: inputs are read, the pipeline runs synchronously, the
//! report goes to stdout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use sv_pipeline::{draw, sample, sample_traced, SampleError, SamplingParams, TokenScore};
use sv_render::{header, percent, render, RenderOptions, View};
use sv_source::{DistributionSource, Example, SourceError};

/// Errors from the visualizer front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("cannot read score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the raw scores come from.
#[derive(Debug, Clone)]
pub enum InputSelect {
    /// A bundled example evaluated at a temperature.
    Example(Example, f64),
    /// A JSON file holding an array of `{ "label", "score" }` records.
    ScoresFile(PathBuf),
}

/// One record of an external score table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub label: String,
    pub score: f64,
}

/// Everything one invocation needs, owned by the caller.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub input: InputSelect,
    pub params: SamplingParams,
    pub view: View,
    /// Also print the distribution after every pipeline stage.
    pub explain: bool,
    /// Draw one token from the final distribution with this seed.
    pub draw_seed: Option<u64>,
    pub render: RenderOptions,
}

/// Read an external score table from a JSON file.
pub fn load_scores(path: &Path) -> Result<Vec<TokenScore>, CliError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<ScoreRecord> = serde_json::from_str(&text)?;
    debug!(path = %path.display(), records = records.len(), "loaded score table");
    Ok(records
        .into_iter()
        .map(|r| TokenScore::new(r.label, r.score))
        .collect())
}

/// Produce the full report for one invocation.
pub fn run(args: &RunArgs) -> Result<String, CliError> {
    let (prompt, scores) = match &args.input {
        InputSelect::Example(example, temperature) => (
            example.prompt().to_string(),
            example.raw_scores(*temperature)?,
        ),
        InputSelect::ScoresFile(path) => {
            ("(external score table)".to_string(), load_scores(path)?)
        }
    };

    let mut out = String::new();

    if args.explain {
        let snapshots = sample_traced(&scores, &args.params)?;
        let dist = snapshots.last().map(|s| s.dist.clone()).unwrap_or_default();
        out.push_str(&header(&prompt, &dist));
        out.push('\n');
        for snap in &snapshots {
            out.push_str(&format!("after {} ({} tokens):\n", snap.stage, snap.dist.len()));
            for token in &snap.dist {
                out.push_str(&format!("  {:<12}{:>6}\n", token.label, percent(token.prob)));
            }
        }
        out.push('\n');
        out.push_str(&render(&dist, args.view, &args.render));
        append_draw(&mut out, &dist, args.draw_seed)?;
        return Ok(out);
    }

    let dist = sample(&scores, &args.params)?;
    debug!(
        kept = dist.len(),
        top_k = args.params.top_k,
        top_p = args.params.top_p,
        "sampling pipeline complete"
    );

    out.push_str(&header(&prompt, &dist));
    out.push('\n');
    out.push_str(&render(&dist, args.view, &args.render));
    append_draw(&mut out, &dist, args.draw_seed)?;
    Ok(out)
}

fn append_draw(
    out: &mut String,
    dist: &[sv_pipeline::TokenProb],
    seed: Option<u64>,
) -> Result<(), CliError> {
    if let Some(seed) = seed {
        let token = draw(dist, seed)?;
        out.push_str(&format!("\nSampled token: {} (seed {})\n", token.label, seed));
    }
    Ok(())
}
