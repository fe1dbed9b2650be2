//! color-harmony: harmony-rule palette generation with lock-aware merge
//!
//! This library implements the algorithmic core of a color palette
//! workshop: hex/HSL conversion, harmony rules that derive a 5-color
//! palette from a base color, a working palette whose slots can be locked
//! and reordered, and a collection of saved snapshots with stable identity.
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{HarmonyMode, PaletteCollection, WorkingPalette};
//!
//! let mut rng = rand::thread_rng();
//!
//! // Session start: auto-generate a palette
//! let mut palette = WorkingPalette::generate(HarmonyMode::Analogous, &mut rng);
//!
//! // Lock a slot, regenerate: the locked slot survives
//! palette.toggle_lock(2).unwrap();
//! let kept = palette.colors()[2];
//! palette.regenerate(HarmonyMode::Complementary, &mut rng);
//! assert_eq!(palette.colors()[2], kept);
//!
//! // Snapshot into a collection
//! let mut collection = PaletteCollection::new();
//! let id = collection.save(*palette.colors()).id;
//! assert!(collection.get(id).is_some());
//! ```
//!
//! # Color math
//!
//! All rule arithmetic happens in HSL: hue in degrees `[0, 360)`,
//! saturation and lightness as percentages `[0, 100]`. Rules are allowed
//! to push saturation/lightness out of domain (complementary darkens by
//! 20 regardless of the base); the conversion back to [`Rgb`] clamps
//! explicitly before rounding, so extreme bases degrade to black/white/
//! grey instead of wrapping. Hue arithmetic is always reduced with
//! `rem_euclid(360.0)`.
//!
//! The hex round trip is accurate to +-1 per channel (rounding); exact
//! equality after a round trip is not guaranteed and must not be assumed.
//!
//! # Randomness
//!
//! Nothing in this crate owns an RNG. The base-color draw and the
//! `Random` mode take `&mut impl Rng`, so generation is deterministic
//! under a seeded RNG and callers control the entropy source.

pub mod collection;
pub mod color;
pub mod harmony;
pub mod palette;


pub use collection::{PaletteCollection, SavedPalette};
pub use color::{Hsl, ParseColorError, Rgb};
pub use harmony::{HarmonyMode, PALETTE_SIZE};
pub use palette::{PaletteError, WorkingPalette};
