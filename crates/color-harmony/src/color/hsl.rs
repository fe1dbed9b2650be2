//! HSL color triple and the hex/HSL conversion pair.
//!
//! `Hsl` is a transient working representation: harmony rules rotate hues
//! and shift saturation/lightness here, then convert back to [`Rgb`] for
//! exchange. It is never persisted or serialized.

use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness) form.
///
/// # Components
///
/// - `h`: Hue angle in degrees, `[0, 360)` after normalization
/// - `s`: Saturation as a percentage, `[0, 100]`
/// - `l`: Lightness as a percentage, `[0, 100]`
///
/// Rule arithmetic may temporarily push saturation or lightness outside
/// their domains (e.g. `lightness - 20` on an already dark color). The
/// conversion back to [`Rgb`] clamps to the valid domain first, so such
/// intermediate values are harmless. Hue is always reduced into
/// `[0, 360)` with [`rotate_hue`](Self::rotate_hue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation percentage
    pub s: f32,
    /// Lightness percentage
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL triple. Values are taken as-is; see
    /// [`clamp`](Self::clamp) for domain normalization.
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees`, reducing the result into `[0, 360)`.
    ///
    /// Negative rotations work: `-30.0` lands at `h + 330.0`.
    #[inline]
    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Shift saturation by `delta` percentage points (may leave the domain).
    #[inline]
    pub fn shift_saturation(self, delta: f32) -> Self {
        Self {
            s: self.s + delta,
            ..self
        }
    }

    /// Shift lightness by `delta` percentage points (may leave the domain).
    #[inline]
    pub fn shift_lightness(self, delta: f32) -> Self {
        Self {
            l: self.l + delta,
            ..self
        }
    }

    /// Reduce all components into their valid domains: hue into `[0, 360)`,
    /// saturation and lightness clamped to `[0, 100]`.
    #[inline]
    pub fn clamp(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }
}

impl From<Rgb> for Hsl {
    /// Convert an RGB color to HSL.
    ///
    /// Standard 6-sector hue derivation: channels are normalized to
    /// `[0, 1]`, lightness is the max/min midpoint, and for chromatic
    /// colors the hue comes from whichever channel is the maximum.
    /// Achromatic colors (max == min) get `h = 0, s = 0`.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, pinned to 0 by convention
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Rgb {
    /// Convert an HSL triple to RGB.
    ///
    /// Components are clamped into their domains first, then each channel
    /// is sampled from the standard chroma function
    /// `f(n) = l - a * clamp(min(k(n) - 3, 9 - k(n), 1), -1, 1)` with
    /// `k(n) = (n + h/30) mod 12` and `a = s * min(l, 1 - l)`, at
    /// `n = 0, 8, 4` for red, green, blue.
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.clamp();
        let s = s / 100.0;
        let l = l / 100.0;

        let a = s * l.min(1.0 - l);
        let f = |n: f32| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            l - a * (k - 3.0).min(9.0 - k).min(1.0).clamp(-1.0, 1.0)
        };

        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(f(0.0)), channel(f(8.0)), channel(f(4.0)))
    }
}
