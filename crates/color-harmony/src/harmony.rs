//! Harmony rules: deriving a 5-color palette from a base color.

use rand::Rng;

use crate::color::{Hsl, Rgb};

/// Number of slots in a working palette. Every derivation produces exactly
/// this many colors and every lock mask has exactly this many entries.
pub const PALETTE_SIZE: usize = 5;

/// A named rule for deriving related colors from a base color.
///
/// `Random` is a first-class mode, not an error path: any mode string the
/// parser does not recognize degrades to it, and it ignores the base color
/// entirely, producing five independent random draws. This preserves the
/// historical fallback behavior while keeping it nameable and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarmonyMode {
    /// Base plus hues rotated +30, +60, -30, -60 degrees; saturation and
    /// lightness unchanged.
    #[default]
    Analogous,
    /// Base, its 180-degree complement, the complement darkened by 20,
    /// the base darkened by 20, and the base desaturated by 20.
    Complementary,
    /// Base plus +120 and +240 degree rotations, then both rotations
    /// darkened by 20.
    Triadic,
    /// Five independently random colors; the base is ignored.
    Random,
}

impl HarmonyMode {
    /// All harmony modes, in presentation order.
    pub const ALL: [HarmonyMode; 4] = [
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Random,
    ];

    /// Parse a mode name, case-insensitively.
    ///
    /// Unrecognized names degrade to [`HarmonyMode::Random`] rather than
    /// failing; callers that want to observe the degradation can compare
    /// the input against [`as_str`](Self::as_str) afterwards.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "analogous" => Self::Analogous,
            "complementary" => Self::Complementary,
            "triadic" => Self::Triadic,
            _ => Self::Random,
        }
    }

    /// Canonical lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Random => "random",
        }
    }

    /// Derive a full palette from `base` under this rule.
    ///
    /// The first color is always `base` unchanged (except for `Random`,
    /// which draws all five slots from `rng`). Saturation/lightness shifts
    /// may leave their domains here; the conversion back to [`Rgb`] clamps.
    pub fn derive<R: Rng + ?Sized>(self, base: Rgb, rng: &mut R) -> [Rgb; PALETTE_SIZE] {
        let hsl = Hsl::from(base);
        match self {
            Self::Analogous => [
                base,
                hsl.rotate_hue(30.0).into(),
                hsl.rotate_hue(60.0).into(),
                hsl.rotate_hue(-30.0).into(),
                hsl.rotate_hue(-60.0).into(),
            ],
            Self::Complementary => [
                base,
                hsl.rotate_hue(180.0).into(),
                hsl.rotate_hue(180.0).shift_lightness(-20.0).into(),
                hsl.shift_lightness(-20.0).into(),
                hsl.shift_saturation(-20.0).into(),
            ],
            Self::Triadic => [
                base,
                hsl.rotate_hue(120.0).into(),
                hsl.rotate_hue(240.0).into(),
                hsl.rotate_hue(120.0).shift_lightness(-20.0).into(),
                hsl.rotate_hue(240.0).shift_lightness(-20.0).into(),
            ],
            Self::Random => std::array::from_fn(|_| Rgb::random(rng)),
        }
    }
}

impl std::fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
