//! 24-bit RGB color type
//!
//! `Rgb` is the canonical exchange format of the crate: every color that
//! crosses an API boundary is one of these, written as a `#RRGGBB` hex
//! string on the wire.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use super::error::ParseColorError;

/// A 24-bit RGB color.
///
/// Each channel is an 8-bit value in `0..=255`. The canonical textual form
/// is a `#` followed by exactly six hex digits; parsing is case-insensitive
/// and the `#` prefix is optional, display is uppercase `#RRGGBB`.
///
/// # Example
///
/// ```
/// use color_harmony::Rgb;
///
/// let c: Rgb = "#3366cc".parse().unwrap();
/// assert_eq!(c.to_bytes(), [0x33, 0x66, 0xCC]);
/// assert_eq!(c.to_string(), "#3366CC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Draw a uniformly random color.
    ///
    /// Each of the three channels is drawn independently and uniformly
    /// from `0..=255`, which is equivalent to a uniform draw over all
    /// 16 777 216 possible colors.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Leading and
    /// trailing whitespace is trimmed. Anything else (including the
    /// 3-digit CSS shorthand) is an error: the exchange format is
    /// exactly six hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white.to_bytes(), [255, 255, 255]);

        let black: Rgb = "#000000".parse().unwrap();
        assert_eq!(black.to_bytes(), [0, 0, 0]);

        let red: Rgb = "#FF0000".parse().unwrap();
        assert_eq!(red.to_bytes(), [255, 0, 0]);

        // No hash is also accepted
        let no_hash: Rgb = "3366CC".parse().unwrap();
        assert_eq!(no_hash.to_bytes(), [0x33, 0x66, 0xCC]);
    }

    #[test]
    fn test_hex_parsing_case_insensitive() {
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        let mixed: Rgb = "#AbCdEf".parse().unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_hex_parsing_whitespace() {
        let c: Rgb = "  #336699  ".parse().unwrap();
        assert_eq!(c.to_bytes(), [0x33, 0x66, 0x99]);
    }

    #[test]
    fn test_hex_parsing_errors() {
        // Invalid character
        let result = "#GGGGGG".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));

        // CSS shorthand is rejected - the exchange format is 6 digits
        let result = "#F00".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        // Too long
        let result = "#FFFFFFFF".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        // Empty / just hash
        assert!(matches!(
            "".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));

        // Multi-byte characters must not slip past the length check
        let result = "##ＦＦＦ".parse::<Rgb>();
        assert!(result.is_err());
    }

    #[test]
    fn test_display_uppercase() {
        let c = Rgb::new(0x0a, 0xbc, 0xde);
        assert_eq!(c.to_string(), "#0ABCDE");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for c in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(1, 2, 3),
            Rgb::new(0x33, 0x66, 0xCC),
        ] {
            let parsed: Rgb = c.to_string().parse().unwrap();
            assert_eq!(parsed, c);
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c = Rgb::new(0x33, 0x66, 0xCC);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3366CC\"");

        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        // Lowercase input deserializes too
        let lower: Rgb = serde_json::from_str("\"#3366cc\"").unwrap();
        assert_eq!(lower, c);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert!(serde_json::from_str::<Rgb>("\"#12345\"").is_err());
        assert!(serde_json::from_str::<Rgb>("\"not a color\"").is_err());
    }

    #[test]
    fn test_random_uses_full_channel_range() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let c = Rgb::random(&mut rng);
            for ch in c.to_bytes() {
                if ch < 16 {
                    seen_low = true;
                }
                if ch > 239 {
                    seen_high = true;
                }
            }
        }
        assert!(seen_low && seen_high, "channels should span the full range");
    }
}
