//! Color types and the hex/HSL conversion pair.
//!
//! Two representations, one concern each:
//!
//! - [`Rgb`]: the canonical 24-bit exchange format (`#RRGGBB` on the wire)
//! - [`Hsl`]: the transient working form for harmony-rule arithmetic
//!
//! # Example
//!
//! ```
//! use color_harmony::{Hsl, Rgb};
//!
//! let base: Rgb = "#3366CC".parse().unwrap();
//! let hsl = Hsl::from(base);
//! assert!((hsl.h - 220.0).abs() < 0.1);
//!
//! // Rotate the hue, then back to hex for exchange
//! let complement = Rgb::from(hsl.rotate_hue(180.0));
//! assert!((Hsl::from(complement).h - 40.0).abs() < 1.0);
//! ```

mod error;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hsl::Hsl;
pub use rgb::Rgb;
