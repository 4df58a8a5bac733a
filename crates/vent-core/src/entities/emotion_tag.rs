//! Emotion tag entity and the static catalog
//!
//! The catalog is the single source of truth for tag names, emoji glyphs, and
//! display colors. The database table only carries (id, name) and is seeded
//! from this table at startup, so the two can never drift apart.

use crate::value_objects::Snowflake;

/// Emotion tag entity (database-backed reference data)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionTag {
    pub id: Snowflake,
    pub name: String,
}

impl EmotionTag {
    /// Create a new EmotionTag
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Rendering data for this tag, falling back to the default entry
    pub fn rendering(&self) -> &'static CatalogEntry {
        catalog_lookup(&self.name)
    }
}

/// Static catalog entry: how a tag renders on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// The fixed emotion catalog
pub const EMOTION_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "happy",
        emoji: "😊",
        color: "#fbbf24",
    },
    CatalogEntry {
        name: "sad",
        emoji: "😢",
        color: "#60a5fa",
    },
    CatalogEntry {
        name: "angry",
        emoji: "😡",
        color: "#f87171",
    },
    CatalogEntry {
        name: "anxious",
        emoji: "😰",
        color: "#c4b5fd",
    },
    CatalogEntry {
        name: "tired",
        emoji: "😪",
        color: "#94a3b8",
    },
    CatalogEntry {
        name: "other",
        emoji: "🫥",
        color: "#d1d5db",
    },
];

/// Fallback rendering for tags unknown to the catalog
pub const DEFAULT_EMOTION: &CatalogEntry = &EMOTION_CATALOG[EMOTION_CATALOG.len() - 1];

/// Look up a catalog entry by tag name
///
/// Unknown names degrade to the default "other" rendering instead of failing.
pub fn catalog_lookup(name: &str) -> &'static CatalogEntry {
    EMOTION_CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or(DEFAULT_EMOTION)
}
