use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use color_harmony::{HarmonyMode, PaletteCollection, WorkingPalette};

/// Session identifier (opaque random token)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-session palette state.
///
/// Everything a client works on lives here: the working palette with its
/// lock mask, the currently selected harmony mode, and the collection of
/// saved snapshots. Sessions are exclusively owned by one client and never
/// share state with each other.
#[derive(Debug, Clone)]
pub struct PaletteSession {
    pub id: SessionId,
    pub palette: WorkingPalette,
    pub mode: HarmonyMode,
    pub collection: PaletteCollection,
    pub created_at: DateTime<Utc>,
}

impl PaletteSession {
    /// Start a session: a fresh palette is auto-generated under `mode`,
    /// all slots unlocked, the collection empty.
    pub fn new<R: Rng + ?Sized>(id: SessionId, mode: HarmonyMode, rng: &mut R) -> Self {
        Self {
            id,
            palette: WorkingPalette::generate(mode, rng),
            mode,
            collection: PaletteCollection::new(),
            created_at: Utc::now(),
        }
    }

    /// Regenerate the working palette, optionally switching modes first.
    /// Locked slots survive; the selected mode is remembered.
    pub fn generate<R: Rng + ?Sized>(&mut self, mode: Option<HarmonyMode>, rng: &mut R) {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.palette.regenerate(self.mode, rng);
    }
}
