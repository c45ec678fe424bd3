//! Report — an operator-facing triage ticket against published content.
//!
//! A report never mutates or deletes its target; it is purely advisory
//! state. Its own status is mutated only by an operator and never
//! auto-expires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::ContentTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
  /// A factual correction ("the bar count is wrong").
  Correction,
  /// Abusive or infringing content; requires a stated reason.
  Abuse,
}

/// Triage state. Legacy rows with a NULL status column decode as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
  Pending,
  Resolved,
  Ignored,
}

impl ReportStatus {
  pub fn is_terminal(&self) -> bool { !matches!(self, Self::Pending) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
  pub report_id:   Uuid,
  pub target:      ContentTarget,
  pub category:    ReportCategory,
  /// Required when `category` is [`ReportCategory::Abuse`]; enforced at
  /// intake.
  pub reason:      Option<String>,
  pub details:     Option<String>,
  pub reporter_id: Option<Uuid>,
  pub status:      ReportStatus,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_report`]. Reports always start
/// `pending`.
#[derive(Debug, Clone)]
pub struct NewReport {
  pub target:      ContentTarget,
  pub category:    ReportCategory,
  pub reason:      Option<String>,
  pub details:     Option<String>,
  pub reporter_id: Option<Uuid>,
}
