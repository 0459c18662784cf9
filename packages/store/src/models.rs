//! # Durable domain models
//!
//! The JSON documents the app keeps in device storage, shared with the
//! catalog client in the `api` crate. These types are `Serialize +
//! Deserialize` so the same shape flows from the wire into storage unchanged.
//!
//! ## Types
//!
//! | Struct | Stored under | Represents |
//! |--------|--------------|-----------|
//! | [`PlantRecord`] | `"favorites"` (array element) | One saved plant. Carries the catalog `id` used as the dedup/lookup key plus the display fields screens render. Every display field is optional — the catalog omits them freely. |
//! | [`UserSession`] | `"user"` | The signed-in account as persisted on the device. A client-safe projection: credentials never appear here. |

use serde::{Deserialize, Serialize};

/// A plant as returned by the catalog and stored in the favorites list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Catalog id; the only field favorites logic inspects.
    pub id: i64,
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    pub image_url: Option<String>,
}

impl PlantRecord {
    /// Display title, falling back when the catalog has no common name.
    pub fn display_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or("Unknown Plant")
    }

    /// Scientific name with the same screen-facing fallback.
    pub fn display_scientific_name(&self) -> &str {
        self.scientific_name
            .as_deref()
            .unwrap_or("Unknown Scientific Name")
    }
}

/// The signed-in user as persisted on the device.
///
/// Exactly one or zero sessions exist at a time; written on login or
/// registration, removed on sign-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    /// Avatar URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_fall_back_when_missing() {
        let named = PlantRecord {
            id: 1,
            common_name: Some("Rose".to_string()),
            scientific_name: Some("Rosa rubiginosa".to_string()),
            image_url: None,
        };
        assert_eq!(named.display_name(), "Rose");
        assert_eq!(named.display_scientific_name(), "Rosa rubiginosa");

        let sparse = PlantRecord {
            id: 2,
            common_name: None,
            scientific_name: None,
            image_url: None,
        };
        assert_eq!(sparse.display_name(), "Unknown Plant");
        assert_eq!(sparse.display_scientific_name(), "Unknown Scientific Name");
    }
}
