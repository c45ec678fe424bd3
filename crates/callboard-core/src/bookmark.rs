//! Bookmark — a member's saved-state for one piece of published content.
//!
//! At most one row exists per (user, target) pair; the store enforces this
//! with a uniqueness constraint. The category is mutable in place:
//! `practice` → `favorite` represents "mastered, promoted to favorites".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::ContentTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkCategory {
  /// Still learning this one.
  Practice,
  /// Mastered or loved.
  Favorite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
  pub user_id:    Uuid,
  pub target:     ContentTarget,
  pub category:   BookmarkCategory,
  pub created_at: DateTime<Utc>,
}
