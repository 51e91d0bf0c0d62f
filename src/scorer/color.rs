use serde::{Deserialize, Serialize};
use std::fmt;

pub const HUE_EASY: f64 = 120.0;
pub const HUE_HARD: f64 = 0.0;

// Percentages, as written in CSS.
const SATURATION: u32 = 93;
const LIGHTNESS: u32 = 70;
const ALPHA: u32 = 50;

/// Background colour of a unit. Only the hue varies; green is easy, red hard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hue: f64,
}

impl Color {
    pub fn from_hue(hue: f64) -> Self {
        Self { hue }
    }

    /// CSS colour value, e.g. `hsl(60deg 93% 70% / 50%)`.
    pub fn css(&self) -> String {
        format!(
            "hsl({}deg {}% {}% / {}%)",
            self.hue, SATURATION, LIGHTNESS, ALPHA
        )
    }

    /// RGB after compositing the translucent colour over a white page.
    pub fn rgb_on_white(&self) -> (u8, u8, u8) {
        let (r, g, b) = hsl_to_rgb(self.hue, fraction(SATURATION), fraction(LIGHTNESS));
        let alpha = fraction(ALPHA);
        let over = |c: f64| ((c * alpha + (1.0 - alpha)) * 255.0).round() as u8;
        (over(r), over(g), over(b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

fn fraction(percent: u32) -> f64 {
    f64::from(percent) / 100.0
}

fn hsl_to_rgb(hue: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (r + m, g + m, b + m)
}

/// Hue for a unit whose aggregate age is `age`.
///
/// At or below `target_age` the hue is green (120); `scale` years beyond it
/// the hue is red (0); in between it moves linearly. Any numeric input is
/// accepted and the weight is clamped.
pub fn hue_for(age: f64, target_age: f64, scale: f64) -> f64 {
    let weight = (age - target_age) / scale;
    let weight = if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    };
    HUE_EASY + (HUE_HARD - HUE_EASY) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Color::from_hue(60.0).css(), "hsl(60deg 93% 70% / 50%)");
        assert_eq!(Color::from_hue(72.5).css(), "hsl(72.5deg 93% 70% / 50%)");
    }

    #[test]
    fn test_rgb_endpoints() {
        let (r, g, b) = Color::from_hue(HUE_EASY).rgb_on_white();
        assert!(g > r && g > b);
        let (r, g, b) = Color::from_hue(HUE_HARD).rgb_on_white();
        assert!(r > g && r > b);
    }
}
