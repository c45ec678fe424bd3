//! Submission — a pending user-authored request awaiting operator decision.
//!
//! The four submission kinds share one funnel but carry disjoint payloads,
//! so the payload is a tagged union rather than one wide record with many
//! optional fields. The variant name doubles as the `kind` discriminant
//! stored in the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Kind and status ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
  Artist,
  Song,
  Chant,
  Inquiry,
}

/// The decision-engine state machine over a submission.
///
/// Only `Pending` is ever persisted: the terminal states end with physical
/// removal of the row (approval after its publish side effect, rejection
/// with none), so the system keeps no audit trail of past decisions beyond
/// what the side effect itself creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  Pending,
  Approved,
  Rejected,
  /// The accepting transition for inquiries, which produce a [`Reply`]
  /// rather than a master record.
  ///
  /// [`Reply`]: crate::record::Reply
  Replied,
}

// ─── Inquiry category ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryCategory {
  FeatureRequest,
  Other,
}

// ─── Kind-specific drafts ────────────────────────────────────────────────────

/// Payload of an artist-addition submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDraft {
  pub name:        String,
  pub reading:     Option<String>,
  pub profile_url: Option<String>,
}

/// Payload of a song-addition submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDraft {
  pub title:     String,
  pub artist_id: Option<Uuid>,
  #[serde(default)]
  pub streaming: crate::record::StreamingLinks,
}

/// Payload of a chant-template submission.
///
/// Bar count arrives in one of two fields: the numeric `measures` field, or
/// the legacy free-text `bars` field from older clients. `measures` wins
/// when both are present; `bars` is parsed as a fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChantDraft {
  pub title:         String,
  pub content:       String,
  pub measures:      Option<u32>,
  /// Legacy bar-count as entered, e.g. `"8"`. Superseded by `measures`.
  pub bars:          Option<String>,
  pub reference_url: Option<String>,
  pub remarks:       Option<String>,
}

impl ChantDraft {
  /// The effective bar count: `measures` preferred, legacy `bars` parsed as
  /// a fallback. `None` if neither yields a positive integer.
  pub fn resolved_measures(&self) -> Option<u32> {
    if let Some(m) = self.measures {
      return (m > 0).then_some(m);
    }
    self
      .bars
      .as_deref()
      .and_then(|s| s.trim().parse::<u32>().ok())
      .filter(|&m| m > 0)
  }
}

/// Payload of a free-form inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryDraft {
  pub content:  String,
  pub category: InquiryCategory,
}

// ─── Payload union ───────────────────────────────────────────────────────────

/// The typed payload of a submission. Exactly one kind's fields are
/// meaningful per record, by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum SubmissionPayload {
  Artist(ArtistDraft),
  Song(SongDraft),
  Chant(ChantDraft),
  Inquiry(InquiryDraft),
}

impl SubmissionPayload {
  pub fn kind(&self) -> SubmissionKind {
    match self {
      Self::Artist(_) => SubmissionKind::Artist,
      Self::Song(_) => SubmissionKind::Song,
      Self::Chant(_) => SubmissionKind::Chant,
      Self::Inquiry(_) => SubmissionKind::Inquiry,
    }
  }

  /// The discriminant string stored in the `kind` column.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn discriminant(&self) -> &'static str {
    match self {
      Self::Artist(_) => "artist",
      Self::Song(_) => "song",
      Self::Chant(_) => "chant",
      Self::Inquiry(_) => "inquiry",
    }
  }

  /// Serialise the inner draft (without the kind tag) for the
  /// `payload_json` database column.
  pub fn to_json(&self) -> Result<serde_json::Value> {
    // The full serialised form is `{"kind": "...", "data": <payload>}`.
    // We want only the payload.
    let full = serde_json::to_value(self)?;
    Ok(full.get("data").cloned().unwrap_or(serde_json::Value::Null))
  }

  /// Deserialise from the discriminant string and JSON payload stored in
  /// the database.
  pub fn from_parts(
    discriminant: &str,
    data: serde_json::Value,
  ) -> Result<Self> {
    if !matches!(discriminant, "artist" | "song" | "chant" | "inquiry") {
      return Err(Error::UnknownSubmissionKind(discriminant.to_string()));
    }
    let wrapped = serde_json::json!({ "kind": discriminant, "data": data });
    Ok(serde_json::from_value(wrapped)?)
  }
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// A pending request to create or discuss content. Created by intake with
/// status `pending`; mutated only by the decision engine, whose terminal
/// transitions delete the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
  pub submission_id: Uuid,
  /// The submitting member. Nullable for rows that predate sign-in.
  pub owner_id:      Option<Uuid>,
  pub payload:       SubmissionPayload,
  pub status:        SubmissionStatus,
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_submission`].
/// `status` is always `pending` and `created_at` is set by the store.
#[derive(Debug, Clone)]
pub struct NewSubmission {
  pub owner_id: Option<Uuid>,
  pub payload:  SubmissionPayload,
}
