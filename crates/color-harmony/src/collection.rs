//! Saved palettes: immutable snapshots with stable identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::harmony::PALETTE_SIZE;

/// An immutable snapshot of a working palette's colors.
///
/// Lock state is deliberately not part of a snapshot: saving captures the
/// colors as displayed, nothing about how the session got there. `id` is
/// unique for the lifetime of the owning [`PaletteCollection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Collection-unique identifier, assigned at save time.
    pub id: u64,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The five colors, in display order, serialized as `#RRGGBB` strings.
    pub colors: [Rgb; PALETTE_SIZE],
}

/// An ordered collection of saved palettes.
///
/// Insertion order is preserved; entries are only ever appended by
/// [`save`](Self::save) and removed by [`delete`](Self::delete). Ids come
/// from a monotonic counter so they stay unique even when two saves land
/// within the same instant.
///
/// # Example
///
/// ```
/// use color_harmony::{PaletteCollection, Rgb};
///
/// let mut collection = PaletteCollection::new();
/// let colors = [Rgb::new(1, 2, 3); 5];
///
/// let id = collection.save(colors).id;
/// assert_eq!(collection.len(), 1);
/// assert!(collection.delete(id));
/// assert!(!collection.delete(id)); // idempotent
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteCollection {
    next_id: u64,
    entries: Vec<SavedPalette>,
}

impl PaletteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Snapshot `colors` into a new entry and append it.
    ///
    /// The colors are copied, so later mutation of the working palette
    /// never affects the snapshot.
    pub fn save(&mut self, colors: [Rgb; PALETTE_SIZE]) -> &SavedPalette {
        let entry = SavedPalette {
            id: self.next_id,
            saved_at: Utc::now(),
            colors,
        };
        self.next_id += 1;
        self.entries.push(entry);
        self.entries.last().expect("just pushed")
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Returns whether a removal occurred; deleting an absent id is a
    /// no-op, not an error.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() != before
    }

    /// Look up an entry by id.
    pub fn get(&self, id: u64) -> Option<&SavedPalette> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// All entries in insertion order. This slice is the export payload:
    /// serializing it yields the order-preserving JSON array of
    /// `{id, saved_at, colors}` objects, with no lock state.
    #[inline]
    pub fn entries(&self) -> &[SavedPalette] {
        &self.entries
    }

    /// Clone the entries into a standalone export payload.
    pub fn export(&self) -> Vec<SavedPalette> {
        self.entries.clone()
    }

    /// Number of saved palettes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been saved (or everything was deleted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(seed: u8) -> [Rgb; PALETTE_SIZE] {
        std::array::from_fn(|i| Rgb::new(seed, i as u8, seed.wrapping_add(i as u8)))
    }

    #[test]
    fn test_save_assigns_unique_monotonic_ids() {
        let mut collection = PaletteCollection::new();
        let a = collection.save(colors(1)).id;
        let b = collection.save(colors(2)).id;
        let c = collection.save(colors(3)).id;
        assert!(a < b && b < c);

        // Ids are never reused, even after a delete
        assert!(collection.delete(c));
        let d = collection.save(colors(4)).id;
        assert!(d > c);
    }

    #[test]
    fn test_save_is_a_defensive_copy() {
        let mut collection = PaletteCollection::new();
        let mut working = colors(9);
        let id = collection.save(working).id;

        // Mutate the "working palette" afterwards
        working[0] = Rgb::new(255, 255, 255);

        assert_eq!(collection.get(id).unwrap().colors, colors(9));
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut collection = PaletteCollection::new();
        collection.save(colors(1));
        collection.save(colors(2));
        let snapshot = collection.entries().to_vec();

        assert!(!collection.delete(999));
        assert_eq!(collection.entries(), &snapshot[..]);
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut collection = PaletteCollection::new();
        let a = collection.save(colors(1)).id;
        let b = collection.save(colors(2)).id;
        let c = collection.save(colors(3)).id;

        assert!(collection.delete(b));
        let ids: Vec<u64> = collection.entries().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_export_round_trips_through_json() {
        let mut collection = PaletteCollection::new();
        collection.save(colors(1));
        collection.save(colors(2));

        let json = serde_json::to_string(collection.entries()).unwrap();
        let back: Vec<SavedPalette> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection.export());

        // Colors serialize as "#RRGGBB" strings
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first_color = value[0]["colors"][0].as_str().unwrap();
        assert_eq!(first_color.len(), 7);
        assert!(first_color.starts_with('#'));
        assert!(first_color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_export_has_no_lock_state() {
        let mut collection = PaletteCollection::new();
        collection.save(colors(5));

        let value = serde_json::to_value(collection.entries()).unwrap();
        assert!(value[0].get("locked").is_none());
        let keys: Vec<&String> = value[0].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "payload is exactly id, saved_at, colors");
    }
}
