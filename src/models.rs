//! Frontend Models
//!
//! Data structures matching the `/items` resource.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "item")]
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
        }
    }
}

/// Body of a partial update that only touches the checked flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedPatch {
    pub checked: bool,
}
