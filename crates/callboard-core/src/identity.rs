//! Identity collaborator types.
//!
//! Who the current user is, and what they may do, is resolved by the
//! request-handling layer above this crate. The pipeline only ever sees the
//! resolved [`CurrentUser`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The privilege level of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  /// An ordinary signed-in member: may submit content and manage their own
  /// bookmarks.
  Member,
  /// The site operator: may additionally decide submissions, review bulletin
  /// posts, and triage reports.
  Operator,
}

/// A resolved identity, as produced by the layer above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
  pub user_id: Uuid,
  pub role:    Role,
}

impl CurrentUser {
  pub fn is_operator(&self) -> bool { self.role == Role::Operator }
}
