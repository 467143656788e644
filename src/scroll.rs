use std::fmt;

use crate::theme::Theme;

/// Scroll offset (px) at which the navbar background starts fading in.
pub const FADE_START: f64 = 0.0;
/// Scroll offset (px) at which the navbar background is fully applied.
pub const FADE_END: f64 = 100.0;
/// Alpha of the navbar background once fully faded in.
pub const MAX_ALPHA: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between two colours, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| {
            (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // three decimals is plenty for a css alpha and keeps the string stable
        let a = (self.a * 1000.0).round() / 1000.0;
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}

/// Shade the navbar fades towards for a given theme.
fn shade(theme: Theme) -> (u8, u8, u8) {
    match theme {
        Theme::Dark => (0, 0, 0),
        Theme::Light => (255, 255, 255),
    }
}

/// Position of `offset` inside the fade range, clamped to [0, 1].
pub fn fade_progress(offset: f64) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    ((offset - FADE_START) / (FADE_END - FADE_START)).clamp(0.0, 1.0)
}

/// Navbar background for the current vertical scroll offset.
///
/// Maps `[FADE_START, FADE_END]` linearly from a fully transparent shade to the
/// same shade at `MAX_ALPHA`. Offsets outside the range clamp to the nearest end.
pub fn navbar_background(theme: Theme, offset: f64) -> Rgba {
    let (r, g, b) = shade(theme);
    let from = Rgba::new(r, g, b, 0.0);
    let to = Rgba::new(r, g, b, MAX_ALPHA);
    from.lerp(to, fade_progress(offset))
}

/// Element id a navigation label scrolls to.
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page_is_transparent() {
        for theme in [Theme::Dark, Theme::Light] {
            let bg = navbar_background(theme, 0.0);
            assert_eq!(bg.a, 0.0);
        }
        assert_eq!(
            navbar_background(Theme::Dark, 0.0).to_string(),
            "rgba(0, 0, 0, 0)"
        );
        assert_eq!(
            navbar_background(Theme::Light, 0.0).to_string(),
            "rgba(255, 255, 255, 0)"
        );
    }

    #[test]
    fn test_past_fade_end_clamps() {
        for offset in [100.0, 101.0, 5000.0] {
            let bg = navbar_background(Theme::Dark, offset);
            assert_eq!(bg, Rgba::new(0, 0, 0, MAX_ALPHA));
        }
        assert_eq!(
            navbar_background(Theme::Light, 250.0).to_string(),
            "rgba(255, 255, 255, 0.8)"
        );
    }

    #[test]
    fn test_negative_offset_clamps() {
        // overscroll on touch devices reports negative offsets
        assert_eq!(navbar_background(Theme::Dark, -40.0).a, 0.0);
        assert_eq!(navbar_background(Theme::Dark, f64::NAN).a, 0.0);
    }

    #[test]
    fn test_alpha_increases_monotonically() {
        let mut last = -1.0;
        for offset in 0..=100 {
            let a = navbar_background(Theme::Light, f64::from(offset)).a;
            assert!(a > last, "alpha should grow at offset {offset}");
            last = a;
        }
        let half = navbar_background(Theme::Dark, 50.0);
        assert!((half.a - 0.4).abs() < 1e-9);
        assert_eq!(half.to_string(), "rgba(0, 0, 0, 0.4)");
    }

    #[test]
    fn test_lerp_channels() {
        let black = Rgba::new(0, 0, 0, 0.0);
        let white = Rgba::new(255, 255, 255, 1.0);
        assert_eq!(black.lerp(white, 0.5), Rgba::new(128, 128, 128, 0.5));
        assert_eq!(black.lerp(white, 2.0), white);
        assert_eq!(black.lerp(white, -1.0), black);
    }

    #[test]
    fn test_section_id() {
        assert_eq!(section_id("Projects"), "projects");
        assert_eq!(section_id("Home"), "home");
        assert_eq!(section_id("experience"), "experience");
    }
}
