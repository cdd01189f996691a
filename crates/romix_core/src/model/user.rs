//! Core user record.

use serde::{Deserialize, Serialize};

/// Stable numeric identifier for users and feed rows.
pub type UserId = i64;

/// User record as handed out by the core-model layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreUser {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl CoreUser {
    /// Creates a user without an email address.
    pub fn new(id: UserId, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            is_active,
        }
    }

    /// Human-readable activity label used in list subtitles.
    pub fn activity_label(&self) -> &'static str {
        activity_label(self.is_active)
    }
}

/// Maps an activity flag to its display label.
pub fn activity_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}
