//! Feed records produced by the repository layer.
//!
//! # Invariants
//! - `UserSummary.checksum` is `compute_checksum(name)`.
//! - `FeedItem.id` is the row position, not the user id.
//! - `NetworkSnapshot.users` holds the single fetched user.

use crate::collab::{ApiPostDto, ApiUserDto};
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Display-oriented projection of one core user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub checksum: i32,
    pub is_active: bool,
}

/// One feed row pairing generated text with the summarized user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Dense zero-based position in the source list.
    pub id: i64,
    /// `User {name}`.
    pub title: String,
    /// `Active` or `Inactive`.
    pub subtitle: Option<String>,
    pub user_summary: UserSummary,
}

/// Result of one repository fetch. Built per call and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub users: Vec<ApiUserDto>,
    pub posts: Vec<ApiPostDto>,
    pub raw_hash: i32,
}

impl NetworkSnapshot {
    /// Returns the fetched user, if any.
    pub fn primary_user(&self) -> Option<&ApiUserDto> {
        self.users.first()
    }
}
