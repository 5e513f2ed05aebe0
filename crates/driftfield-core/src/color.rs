#![forbid(unsafe_code)]

//! Colour values and the particle palettes.
//!
//! Colours print as CSS colour strings so a canvas host can hand them to
//! `fillStyle`/`strokeStyle` directly.

use std::fmt;

/// 8-bit RGB with a fractional alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

impl From<Hsla> for Rgba {
    fn from(c: Hsla) -> Self {
        let h = c.h.rem_euclid(360.0) / 60.0;
        let s = (c.s / 100.0).clamp(0.0, 1.0);
        let l = (c.l / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b), c.a.clamp(0.0, 1.0))
    }
}

/// Either colour notation, as handed to a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Rgba(Rgba),
    Hsla(Hsla),
}

impl Paint {
    #[inline]
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Rgba(c) => c.a,
            Self::Hsla(c) => c.a,
        }
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba {
        match self {
            Self::Rgba(c) => c,
            Self::Hsla(c) => c.into(),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Self::Rgba(c)
    }
}

impl From<Hsla> for Paint {
    fn from(c: Hsla) -> Self {
        Self::Hsla(c)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(c) => c.fmt(f),
            Self::Hsla(c) => c.fmt(f),
        }
    }
}

const SATURATION: f64 = 70.0;
const LIGHTNESS: f64 = 60.0;
/// Oscillation rate of the cyan and orchid palettes, radians per millisecond.
const OSCILLATION_RATE: f64 = 0.001;
/// Rotation rate of the spectrum palette, degrees per millisecond.
const ROTATION_RATE: f64 = 0.1;

/// Particle palette. Cycles with period 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Hue oscillates ±40° around cyan.
    #[default]
    Cyan,
    /// Hue rotates through the full wheel.
    Spectrum,
    /// Hue oscillates ±60° around purple/pink.
    Orchid,
}

impl ColorMode {
    pub const ALL: [Self; 3] = [Self::Cyan, Self::Spectrum, Self::Orchid];

    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Self::Cyan => 0,
            Self::Spectrum => 1,
            Self::Orchid => 2,
        }
    }

    /// Mode for an index, wrapping modulo 3.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index % 3 {
            0 => Self::Cyan,
            1 => Self::Spectrum,
            _ => Self::Orchid,
        }
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Spectrum => "spectrum",
            Self::Orchid => "orchid",
        }
    }

    /// Glyph shown on the palette control button.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cyan => "💙",
            Self::Spectrum => "🌈",
            Self::Orchid => "💜",
        }
    }

    /// Hue in degrees for a particle's hue seed at `time_ms`.
    pub fn hue(self, seed: f64, time_ms: f64) -> f64 {
        match self {
            Self::Cyan => 180.0 + (time_ms * OSCILLATION_RATE + seed).sin() * 40.0,
            Self::Spectrum => (seed + time_ms * ROTATION_RATE).rem_euclid(360.0),
            Self::Orchid => 280.0 + (time_ms * OSCILLATION_RATE + seed).sin() * 60.0,
        }
    }

    pub fn paint(self, seed: f64, time_ms: f64, alpha: f64) -> Hsla {
        Hsla::new(
            self.hue(seed, time_ms),
            SATURATION,
            LIGHTNESS,
            alpha.clamp(0.0, 1.0),
        )
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycles_with_period_three() {
        for mode in ColorMode::ALL {
            assert_eq!(mode.next().next().next(), mode);
            assert_ne!(mode.next(), mode);
        }
        assert_eq!(ColorMode::from_index(4), ColorMode::Spectrum);
    }

    #[test]
    fn hue_bands_match_palettes() {
        for step in 0..200 {
            let t = step as f64 * 97.0;
            let seed = step as f64 * 1.7;
            let cyan = ColorMode::Cyan.hue(seed, t);
            assert!((140.0..=220.0).contains(&cyan), "cyan={cyan}");
            let orchid = ColorMode::Orchid.hue(seed, t);
            assert!((220.0..=340.0).contains(&orchid), "orchid={orchid}");
            let spectrum = ColorMode::Spectrum.hue(seed, t);
            assert!((0.0..360.0).contains(&spectrum), "spectrum={spectrum}");
        }
    }

    #[test]
    fn spectrum_rotates_over_time() {
        let a = ColorMode::Spectrum.hue(10.0, 0.0);
        let b = ColorMode::Spectrum.hue(10.0, 1000.0);
        assert_eq!(a, 10.0);
        assert_eq!(b, 110.0);
        assert_eq!(ColorMode::Spectrum.hue(350.0, 200.0), 10.0);
    }

    #[test]
    fn css_strings() {
        assert_eq!(
            Rgba::new(10, 10, 10, 0.1).to_string(),
            "rgba(10, 10, 10, 0.1)"
        );
        assert_eq!(
            Hsla::new(180.0, 70.0, 60.0, 0.8).to_string(),
            "hsla(180, 70%, 60%, 0.8)"
        );
        assert_eq!(
            Paint::from(Rgba::new(1, 2, 3, 1.0)).to_string(),
            "rgba(1, 2, 3, 1)"
        );
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(
            Rgba::from(Hsla::new(0.0, 100.0, 50.0, 1.0)),
            Rgba::new(255, 0, 0, 1.0)
        );
        assert_eq!(
            Rgba::from(Hsla::new(120.0, 100.0, 50.0, 1.0)),
            Rgba::new(0, 255, 0, 1.0)
        );
        assert_eq!(
            Rgba::from(Hsla::new(240.0, 100.0, 50.0, 0.5)),
            Rgba::new(0, 0, 255, 0.5)
        );
        assert_eq!(
            Rgba::from(Hsla::new(180.0, 0.0, 100.0, 1.0)),
            Rgba::new(255, 255, 255, 1.0)
        );
    }

    #[test]
    fn paint_clamps_alpha() {
        let c = ColorMode::Cyan.paint(0.0, 0.0, 1.7);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.s, 70.0);
        assert_eq!(c.l, 60.0);
    }
}
