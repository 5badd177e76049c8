use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::item::CatalogItem;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;

/// One caught creature stored in the user's box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    /// Opaque identifier assigned by the service
    pub id: String,
    /// Catalog identifier this entry refers to (fixed after creation)
    pub pokemon_id: u32,
    pub level: u8,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CollectionEntry {
    /// Build an update payload that keeps every field of this entry.
    pub fn to_update(&self) -> CollectionEntryUpdate {
        CollectionEntryUpdate {
            level: self.level,
            location: self.location.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
        }
    }
}

/// Body for `POST /box/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollectionEntry {
    pub pokemon_id: u32,
    pub level: u8,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewCollectionEntry {
    /// Create a payload, trimming text fields and dropping empty notes.
    pub fn new(
        pokemon_id: u32,
        level: u8,
        location: &str,
        notes: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let entry = Self {
            pokemon_id,
            level,
            location: location.trim().to_string(),
            notes: normalize_notes(notes),
            created_at,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(self.level, &self.location)
    }
}

/// Body for `PUT /box/{id}`.
///
/// Has no catalog reference: an entry's creature cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntryUpdate {
    pub level: u8,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CollectionEntryUpdate {
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.trim().to_string();
        self
    }

    /// An empty string clears the note.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = normalize_notes(Some(notes));
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(self.level, &self.location)
    }
}

/// A box entry joined with the catalog item it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub entry: CollectionEntry,
    pub item: CatalogItem,
}

/// Parse a user-supplied ISO-8601 timestamp (RFC 3339) into UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::InvalidTimestamp(s.to_string()))
}

fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

fn validate_fields(level: u8, location: &str) -> Result<(), CoreError> {
    if location.trim().is_empty() {
        return Err(CoreError::MissingField("Location"));
    }
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(CoreError::LevelOutOfRange {
            level,
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
