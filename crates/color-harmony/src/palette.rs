//! The working palette: five colors with a parallel lock mask.
//!
//! The lock mask is structurally paired with the colors so that every
//! mutation (regeneration, reorder) applies to both or neither. A locked
//! slot survives regeneration unchanged; a reorder moves a slot's lock
//! together with its color.

use std::fmt;

use rand::Rng;

use crate::color::Rgb;
use crate::harmony::{HarmonyMode, PALETTE_SIZE};

/// Error type for working-palette slot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// A slot index outside `[0, PALETTE_SIZE)` was given. The palette is
    /// left unchanged when this is returned.
    IndexOutOfRange {
        /// The offending index
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::IndexOutOfRange { index } => {
                write!(
                    f,
                    "palette index {} out of range (palette has {} slots)",
                    index, PALETTE_SIZE
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// The mutable 5-color set a session works on, plus its lock mask.
///
/// Both sequences always have exactly [`PALETTE_SIZE`] entries and
/// `locked[i]` always refers to `colors[i]`; the type offers no operation
/// that can move one without the other.
///
/// # Example
///
/// ```
/// use color_harmony::{HarmonyMode, WorkingPalette};
///
/// let mut rng = rand::thread_rng();
/// let mut palette = WorkingPalette::generate(HarmonyMode::Analogous, &mut rng);
///
/// palette.toggle_lock(0).unwrap();
/// let kept = palette.colors()[0];
/// palette.regenerate(HarmonyMode::Triadic, &mut rng);
/// assert_eq!(palette.colors()[0], kept);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingPalette {
    colors: [Rgb; PALETTE_SIZE],
    locked: [bool; PALETTE_SIZE],
}

impl WorkingPalette {
    /// Create a palette with the given colors, all slots unlocked.
    pub fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self {
            colors,
            locked: [false; PALETTE_SIZE],
        }
    }

    /// Auto-generate a fresh palette under `mode`, all slots unlocked.
    ///
    /// This is the session-start path: a random base color is drawn and
    /// the harmony rule derives the rest.
    pub fn generate<R: Rng + ?Sized>(mode: HarmonyMode, rng: &mut R) -> Self {
        Self::new(mode.derive(Rgb::random(rng), rng))
    }

    /// The current colors, index-aligned with [`locked`](Self::locked).
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// The current lock mask, index-aligned with [`colors`](Self::colors).
    #[inline]
    pub fn locked(&self) -> &[bool; PALETTE_SIZE] {
        &self.locked
    }

    /// Regenerate the palette under `mode`, keeping locked slots.
    ///
    /// Draws a random base color, derives five candidates from it, and
    /// merges index-by-index: locked slots keep their current color,
    /// unlocked slots take the candidate. A fully locked palette is
    /// returned unchanged; a fully unlocked one takes the derivation
    /// verbatim. Deterministic given the palette, the mode and the RNG
    /// draw.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, mode: HarmonyMode, rng: &mut R) {
        let candidates = mode.derive(Rgb::random(rng), rng);
        for (i, candidate) in candidates.into_iter().enumerate() {
            if !self.locked[i] {
                self.colors[i] = candidate;
            }
        }
    }

    /// Toggle the lock on slot `index`, returning the new lock state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, PaletteError> {
        if index >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange { index });
        }
        self.locked[index] = !self.locked[index];
        Ok(self.locked[index])
    }

    /// Move the slot at `from` to position `to`, shifting the slots in
    /// between. Color and lock state travel together.
    ///
    /// A `to` of `None` models a cancelled move (a drop outside any valid
    /// target) and is a successful no-op. Out-of-range indices fail with
    /// [`PaletteError::IndexOutOfRange`] and mutate nothing.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> Result<(), PaletteError> {
        if from >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange { index: from });
        }
        let Some(to) = to else {
            return Ok(());
        };
        if to >= PALETTE_SIZE {
            return Err(PaletteError::IndexOutOfRange { index: to });
        }

        // Remove-and-reinsert expressed as a rotation over the affected
        // range, applied identically to both sequences.
        if from < to {
            self.colors[from..=to].rotate_left(1);
            self.locked[from..=to].rotate_left(1);
        } else {
            self.colors[to..=from].rotate_right(1);
            self.locked[to..=from].rotate_right(1);
        }
        Ok(())
    }
}
