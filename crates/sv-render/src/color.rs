//! Color and number formatting shared by all views.
//!
//! Tokens are drawn in one green whose alpha channel carries the
//! probability; for the terminal the alpha is composited over a white
//! background into a concrete truecolor escape. With color off, the alpha
//! degrades to a shade character instead.

/// Token green, `rgb(34, 197, 94)`.
pub const TOKEN_GREEN: (u8, u8, u8) = (34, 197, 94);

/// The token color with alpha equal to the probability, clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn token(prob: f64) -> Self {
        let (r, g, b) = TOKEN_GREEN;
        Self {
            r,
            g,
            b,
            alpha: prob.clamp(0.0, 1.0),
        }
    }

    /// Composite over a white background into an opaque color.
    pub fn over_white(&self) -> (u8, u8, u8) {
        let blend = |c: u8| -> u8 {
            let v = f64::from(c) * self.alpha + 255.0 * (1.0 - self.alpha);
            v.round() as u8
        };
        (blend(self.r), blend(self.g), blend(self.b))
    }
}

/// Probability as a display percentage, one decimal place.
pub fn percent(prob: f64) -> String {
    format!("{:.1}%", prob * 100.0)
}

/// Shade character standing in for the alpha channel when color is off.
pub fn shade_char(alpha: f64) -> char {
    match alpha.clamp(0.0, 1.0) {
        a if a < 0.25 => '░',
        a if a < 0.5 => '▒',
        a if a < 0.75 => '▓',
        _ => '█',
    }
}

/// A block of `len` cells shaded by `prob`, as a colored escape sequence or
/// a plain shade run.
pub fn block(prob: f64, len: usize, color: bool) -> String {
    if len == 0 {
        return String::new();
    }
    if color {
        let (r, g, b) = Rgba::token(prob).over_white();
        format!(
            "\x1b[38;2;{};{};{}m{}\x1b[0m",
            r,
            g,
            b,
            "█".repeat(len)
        )
    } else {
        shade_char(prob).to_string().repeat(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        assert_eq!(percent(0.8673469387755102), "86.7%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(percent(0.0306), "3.1%");
    }

    #[test]
    fn test_alpha_clamped() {
        assert_abs_diff_eq!(Rgba::token(1.7).alpha, 1.0);
        assert_abs_diff_eq!(Rgba::token(-0.2).alpha, 0.0);
    }

    #[test]
    fn test_full_alpha_is_token_green() {
        assert_eq!(Rgba::token(1.0).over_white(), TOKEN_GREEN);
    }

    #[test]
    fn test_zero_alpha_is_white() {
        assert_eq!(Rgba::token(0.0).over_white(), (255, 255, 255));
    }

    #[test]
    fn test_shades_step_with_probability() {
        assert_eq!(shade_char(0.1), '░');
        assert_eq!(shade_char(0.3), '▒');
        assert_eq!(shade_char(0.6), '▓');
        assert_eq!(shade_char(0.9), '█');
    }

    #[test]
    fn test_plain_block_has_no_escapes() {
        let b = block(0.9, 4, false);
        assert_eq!(b, "████");
        assert!(!b.contains('\x1b'));
    }
}
