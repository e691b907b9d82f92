//! Item Entity
//!
//! A single grocery-list record. The label travels as `item` on the wire,
//! which keeps existing `db.json` style payloads readable.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, DomainError, DomainResult};

/// A grocery-list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Client-chosen unique identifier
    pub id: String,
    /// What to buy
    #[serde(rename = "item")]
    pub label: String,
    /// Whether it is already in the basket
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    /// Create a new unchecked item
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: &ItemPatch) -> DomainResult<()> {
        if let Some(label) = &patch.label {
            self.label = validate_label(label)?;
        }
        if let Some(checked) = patch.checked {
            self.checked = checked;
        }
        Ok(())
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Body of `POST /items`. The id is optional; the server generates one when
/// the client does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "item")]
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

impl NewItem {
    /// Validate and turn into a stored item, using `fallback_id` when no id was sent
    pub fn into_item(self, fallback_id: impl FnOnce() -> String) -> DomainResult<Item> {
        let id = match self.id {
            Some(id) if id.trim().is_empty() => {
                return Err(DomainError::InvalidInput("id must not be empty".to_string()));
            }
            Some(id) => id,
            None => fallback_id(),
        };
        Ok(Item {
            id,
            label: validate_label(&self.label)?,
            checked: self.checked,
        })
    }
}

/// Body of `PATCH /items/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, rename = "item", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn validate_label(label: &str) -> DomainResult<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("item label must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
