use std::fmt;
use std::str::FromStr;

use sv_pipeline::TokenScore;

use crate::error::{Result, SourceError};
use crate::source::DistributionSource;

/// How one candidate's raw score responds to temperature:
/// `score = max(floor, base + slope * temperature)`.
///
/// Leading candidates have a negative slope (heat spreads their mass to the
/// tail) and a floor that keeps the score positive across the whole
/// temperature range.
struct ScoreRule {
    label: &'static str,
    base: f64,
    slope: f64,
    floor: f64,
}

impl ScoreRule {
    const fn new(label: &'static str, base: f64, slope: f64) -> Self {
        Self {
            label,
            base,
            slope,
            floor: 0.0,
        }
    }

    const fn with_floor(label: &'static str, base: f64, slope: f64, floor: f64) -> Self {
        Self {
            label,
            base,
            slope,
            floor,
        }
    }

    fn eval(&self, temperature: f64) -> f64 {
        (self.base + self.slope * temperature).max(self.floor)
    }
}

const MATH_PROMPT: &str = "1 + 1 =";
const MATH_RULES: [ScoreRule; 10] = [
    ScoreRule::with_floor("2", 0.85, -0.3, 0.05),
    ScoreRule::new("3", 0.1, 0.1),
    ScoreRule::new("1", 0.03, 0.05),
    ScoreRule::new("0", 0.01, 0.03),
    ScoreRule::new("4", 0.01, 0.02),
    ScoreRule::new("5", 0.005, 0.02),
    ScoreRule::new("7", 0.003, 0.01),
    ScoreRule::new("8", 0.002, 0.01),
    ScoreRule::new("10", 0.001, 0.01),
    ScoreRule::new("11", 0.001, 0.01),
];

const POEM_PROMPT: &str = "Twinkle twinkle little";
const POEM_RULES: [ScoreRule; 10] = [
    ScoreRule::with_floor("star", 0.7, -0.25, 0.05),
    ScoreRule::new("car", 0.1, 0.1),
    ScoreRule::new("light", 0.08, 0.07),
    ScoreRule::new("bar", 0.06, 0.08),
    ScoreRule::new("bird", 0.05, 0.05),
    ScoreRule::new("moon", 0.03, 0.04),
    ScoreRule::new("dream", 0.02, 0.04),
    ScoreRule::new("kite", 0.01, 0.03),
    ScoreRule::new("cloud", 0.01, 0.03),
    ScoreRule::new("sky", 0.01, 0.02),
];

const OPEN_PROMPT: &str = "The secret to success is";
const OPEN_RULES: [ScoreRule; 10] = [
    ScoreRule::new("hard", 0.2, 0.15),
    ScoreRule::new("luck", 0.18, 0.12),
    ScoreRule::new("consistency", 0.17, 0.1),
    ScoreRule::new("discipline", 0.15, 0.1),
    ScoreRule::new("failure", 0.09, 0.1),
    ScoreRule::new("passion", 0.07, 0.1),
    ScoreRule::new("vision", 0.05, 0.08),
    ScoreRule::new("drive", 0.04, 0.05),
    ScoreRule::new("money", 0.03, 0.03),
    ScoreRule::new("grit", 0.02, 0.03),
];

/// One of the three bundled example prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    Math,
    Poem,
    OpenEnded,
}

impl Example {
    pub const ALL: [Example; 3] = [Example::Math, Example::Poem, Example::OpenEnded];

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Example::Math => "math",
            Example::Poem => "poem",
            Example::OpenEnded => "open",
        }
    }

    fn rules(&self) -> &'static [ScoreRule; 10] {
        match self {
            Example::Math => &MATH_RULES,
            Example::Poem => &POEM_RULES,
            Example::OpenEnded => &OPEN_RULES,
        }
    }
}

impl DistributionSource for Example {
    fn prompt(&self) -> &str {
        match self {
            Example::Math => MATH_PROMPT,
            Example::Poem => POEM_PROMPT,
            Example::OpenEnded => OPEN_PROMPT,
        }
    }

    fn raw_scores(&self, temperature: f64) -> Result<Vec<TokenScore>> {
        if !temperature.is_finite() || !(0.0..=2.0).contains(&temperature) {
            return Err(SourceError::TemperatureOutOfRange(temperature));
        }
        Ok(self
            .rules()
            .iter()
            .map(|r| TokenScore::new(r.label, r.eval(temperature)))
            .collect())
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Example {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "math" => Ok(Example::Math),
            "poem" => Ok(Example::Poem),
            "open" => Ok(Example::OpenEnded),
            other => Err(SourceError::UnknownExample(other.to_string())),
        }
    }
}
