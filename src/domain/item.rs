//! The single persisted entity: a named item with an optional description.

use serde::Deserialize;

/// A stored item. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Submitted form fields for an item, before the store has assigned an id.
///
/// The description field is optional in the form; a missing value is treated
/// as empty text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    // Defaulted so an absent field reaches name validation as empty text
    // instead of failing extraction.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ItemDraft {
            name: name.into(),
            description: description.into(),
        }
    }
}
