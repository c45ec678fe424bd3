//! Master records — the published, authoritative form of accepted content.
//!
//! Artists, songs, and chant templates are created exactly once, by the
//! decision engine approving a submission. Call charts are the one
//! exception: their authors publish them directly (see
//! [`crate::store::ContentStore::add_chart`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Published-content targets ───────────────────────────────────────────────

/// The kinds of published content that bookmarks and reports can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
  Chant,
  CallChart,
}

/// A reference to one piece of published content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTarget {
  pub kind: TargetKind,
  pub id:   Uuid,
}

impl ContentTarget {
  pub fn chant(id: Uuid) -> Self { Self { kind: TargetKind::Chant, id } }

  pub fn call_chart(id: Uuid) -> Self {
    Self { kind: TargetKind::CallChart, id }
  }
}

// ─── Artist ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
  pub artist_id:   Uuid,
  pub name:        String,
  /// Phonetic reading of the name, used for sorting and search.
  pub reading:     Option<String>,
  /// External profile URL (official site or social account).
  pub profile_url: Option<String>,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_artist`].
#[derive(Debug, Clone)]
pub struct NewArtist {
  pub name:        String,
  pub reading:     Option<String>,
  pub profile_url: Option<String>,
}

// ─── Song ────────────────────────────────────────────────────────────────────

/// Per-service streaming links for a song. All optional; stored as one JSON
/// column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingLinks {
  pub apple_music: Option<String>,
  pub spotify:     Option<String>,
  pub youtube:     Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
  pub song_id:    Uuid,
  pub title:      String,
  /// The performing artist, if they exist in the catalog.
  pub artist_id:  Option<Uuid>,
  pub streaming:  StreamingLinks,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_song`].
#[derive(Debug, Clone)]
pub struct NewSong {
  pub title:     String,
  pub artist_id: Option<Uuid>,
  pub streaming: StreamingLinks,
}

// ─── Chant template ──────────────────────────────────────────────────────────

/// A reusable named chant template ("mix") with text content and a bar count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chant {
  pub chant_id:       Uuid,
  pub title:          String,
  pub content:        String,
  /// Length in bars; always a positive integer once published.
  pub measures:       u32,
  pub reference_url:  Option<String>,
  /// The member whose submission this was published from.
  pub owner_id:       Option<Uuid>,
  /// How many bookmarks currently point here. Starts at zero; maintained
  /// best-effort by the bookmark state machine.
  pub bookmark_count: u32,
  pub created_at:     DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_chant`].
/// `bookmark_count` is always zero at publication and is not accepted here.
#[derive(Debug, Clone)]
pub struct NewChant {
  pub title:         String,
  pub content:       String,
  pub measures:      u32,
  pub reference_url: Option<String>,
  pub owner_id:      Option<Uuid>,
}

// ─── Call chart ──────────────────────────────────────────────────────────────

/// Publication state shared by call charts and bulletin posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
  Pending,
  Approved,
}

/// A named, ordered sequence of sections describing how to perform the calls
/// for one song. Charts are author-published: they are created already
/// `approved` and never pass through the moderation queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallChart {
  pub chart_id:   Uuid,
  pub title:      String,
  pub song_id:    Option<Uuid>,
  pub owner_id:   Uuid,
  pub status:     PublishStatus,
  pub created_at: DateTime<Utc>,
}

/// One positioned segment of a call chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
  pub section_id: Uuid,
  pub chart_id:   Uuid,
  /// Zero-based order within the chart.
  pub position:   u32,
  /// Where in the song this applies ("A melody", "last chorus", ...).
  pub location:   String,
  pub content:    String,
  /// An optional published chant template this section performs.
  pub chant_id:   Option<Uuid>,
}

/// A chart together with its sections, in position order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartView {
  pub chart:    CallChart,
  pub sections: Vec<Section>,
}

/// Input to [`crate::store::ContentStore::add_chart`].
#[derive(Debug, Clone)]
pub struct NewChart {
  pub title:    String,
  pub song_id:  Option<Uuid>,
  pub owner_id: Uuid,
  pub sections: Vec<NewSection>,
}

#[derive(Debug, Clone)]
pub struct NewSection {
  pub location: String,
  pub content:  String,
  pub chant_id: Option<Uuid>,
}

// ─── Bulletin post ───────────────────────────────────────────────────────────

/// An event announcement. Reviewed like a submission, but approval is a pure
/// in-place status flip — the post already *is* the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinPost {
  pub post_id:    Uuid,
  pub title:      String,
  pub body:       String,
  pub event_date: Option<NaiveDate>,
  pub url:        Option<String>,
  pub owner_id:   Option<Uuid>,
  pub status:     PublishStatus,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_post`]. Posts always start
/// `pending`.
#[derive(Debug, Clone)]
pub struct NewBulletinPost {
  pub title:      String,
  pub body:       String,
  pub event_date: Option<NaiveDate>,
  pub url:        Option<String>,
  pub owner_id:   Option<Uuid>,
}

// ─── Reply ───────────────────────────────────────────────────────────────────

/// The durable artifact of resolving an inquiry: a copy of the original
/// content plus the operator's response. The originating submission is
/// deleted once the reply is written — the reply is the permanent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
  pub reply_id:   Uuid,
  /// The inquiry text, copied verbatim from the submission.
  pub content:    String,
  pub category:   crate::submission::InquiryCategory,
  pub response:   String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ContentStore::add_reply`].
#[derive(Debug, Clone)]
pub struct NewReply {
  pub content:  String,
  pub category: crate::submission::InquiryCategory,
  pub response: String,
}
