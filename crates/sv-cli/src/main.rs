use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use sv_cli::{run, InputSelect, RunArgs};
use sv_pipeline::SamplingParams;
use sv_render::{RenderOptions, View};
use sv_source::Example;

/// sampling-visualizer: token sampling controls in the terminal
#[derive(Parser)]
#[command(name = "sv-cli")]
struct Cli {
    /// Bundled example prompt to visualize.
    #[arg(short, long, value_enum, default_value_t = ExampleArg::Math)]
    example: ExampleArg,

    /// Sampling temperature in [0, 2], passed to the distribution source.
    #[arg(short, long, default_value_t = 1.0)]
    temperature: f64,

    /// Keep only the first K candidates.
    #[arg(short = 'k', long, default_value_t = 10)]
    top_k: usize,

    /// Nucleus (cumulative probability) threshold in [0, 1].
    #[arg(short = 'p', long, default_value_t = 1.0)]
    top_p: f64,

    /// Visualization mode.
    #[arg(short, long, value_enum, default_value_t = ViewArg::Grid)]
    view: ViewArg,

    /// JSON score table to visualize instead of a bundled example.
    #[arg(long, value_name = "FILE")]
    scores: Option<PathBuf>,

    /// Print the distribution after every pipeline stage.
    #[arg(long)]
    explain: bool,

    /// Draw one token from the final distribution.
    #[arg(long)]
    draw: bool,

    /// Random seed for --draw.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Width in cells of bars and of the probability axis.
    #[arg(long, default_value_t = 60)]
    width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExampleArg {
    Math,
    Poem,
    Open,
}

impl From<ExampleArg> for Example {
    fn from(arg: ExampleArg) -> Self {
        match arg {
            ExampleArg::Math => Example::Math,
            ExampleArg::Poem => Example::Poem,
            ExampleArg::Open => Example::OpenEnded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    Grid,
    Bar,
    Axis,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => View::Grid,
            ViewArg::Bar => View::Bar,
            ViewArg::Axis => View::Axis,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let input = match cli.scores {
        Some(path) => InputSelect::ScoresFile(path),
        None => InputSelect::Example(cli.example.into(), cli.temperature),
    };

    let args = RunArgs {
        input,
        params: SamplingParams::new(cli.top_k, cli.top_p),
        view: cli.view.into(),
        explain: cli.explain,
        draw_seed: cli.draw.then_some(cli.seed),
        render: RenderOptions {
            color: !cli.no_color,
            width: cli.width,
        },
    };

    match run(&args) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
