//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings, calendar dates as
//! `YYYY-MM-DD`. Structured fields (streaming links, submission payloads)
//! are stored as compact JSON. UUIDs are stored as hyphenated lowercase
//! strings.

use callboard_core::{
  bookmark::{Bookmark, BookmarkCategory},
  record::{
    Artist, BulletinPost, CallChart, Chant, ContentTarget, PublishStatus,
    Reply, Section, Song, StreamingLinks, TargetKind,
  },
  report::{Report, ReportCategory, ReportStatus},
  submission::{
    InquiryCategory, Submission, SubmissionKind, SubmissionPayload,
    SubmissionStatus,
  },
};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn decode_opt_uuid(s: Option<&str>) -> Result<Option<Uuid>> {
  s.map(decode_uuid).transpose()
}

// ─── Timestamps and dates ────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::Decode(e.to_string()))
}

// ─── Enum discriminants ──────────────────────────────────────────────────────

pub fn encode_submission_kind(k: SubmissionKind) -> &'static str {
  match k {
    SubmissionKind::Artist => "artist",
    SubmissionKind::Song => "song",
    SubmissionKind::Chant => "chant",
    SubmissionKind::Inquiry => "inquiry",
  }
}

pub fn encode_publish_status(s: PublishStatus) -> &'static str {
  match s {
    PublishStatus::Pending => "pending",
    PublishStatus::Approved => "approved",
  }
}

pub fn decode_publish_status(s: &str) -> Result<PublishStatus> {
  match s {
    "pending" => Ok(PublishStatus::Pending),
    "approved" => Ok(PublishStatus::Approved),
    other => Err(Error::Decode(format!("unknown publish status: {other:?}"))),
  }
}

pub fn encode_target_kind(k: TargetKind) -> &'static str {
  match k {
    TargetKind::Chant => "chant",
    TargetKind::CallChart => "call_chart",
  }
}

pub fn decode_target_kind(s: &str) -> Result<TargetKind> {
  match s {
    "chant" => Ok(TargetKind::Chant),
    "call_chart" => Ok(TargetKind::CallChart),
    other => Err(Error::Decode(format!("unknown target kind: {other:?}"))),
  }
}

pub fn encode_report_category(c: ReportCategory) -> &'static str {
  match c {
    ReportCategory::Correction => "correction",
    ReportCategory::Abuse => "abuse",
  }
}

pub fn decode_report_category(s: &str) -> Result<ReportCategory> {
  match s {
    "correction" => Ok(ReportCategory::Correction),
    "abuse" => Ok(ReportCategory::Abuse),
    other => Err(Error::Decode(format!("unknown report category: {other:?}"))),
  }
}

pub fn encode_report_status(s: ReportStatus) -> &'static str {
  match s {
    ReportStatus::Pending => "pending",
    ReportStatus::Resolved => "resolved",
    ReportStatus::Ignored => "ignored",
  }
}

/// NULL status columns come from legacy rows and decode as `Pending`.
pub fn decode_report_status(s: Option<&str>) -> Result<ReportStatus> {
  match s {
    None | Some("pending") => Ok(ReportStatus::Pending),
    Some("resolved") => Ok(ReportStatus::Resolved),
    Some("ignored") => Ok(ReportStatus::Ignored),
    Some(other) => {
      Err(Error::Decode(format!("unknown report status: {other:?}")))
    }
  }
}

pub fn encode_bookmark_category(c: BookmarkCategory) -> &'static str {
  match c {
    BookmarkCategory::Practice => "practice",
    BookmarkCategory::Favorite => "favorite",
  }
}

pub fn decode_bookmark_category(s: &str) -> Result<BookmarkCategory> {
  match s {
    "practice" => Ok(BookmarkCategory::Practice),
    "favorite" => Ok(BookmarkCategory::Favorite),
    other => {
      Err(Error::Decode(format!("unknown bookmark category: {other:?}")))
    }
  }
}

pub fn encode_inquiry_category(c: InquiryCategory) -> &'static str {
  match c {
    InquiryCategory::FeatureRequest => "feature_request",
    InquiryCategory::Other => "other",
  }
}

pub fn decode_inquiry_category(s: &str) -> Result<InquiryCategory> {
  match s {
    "feature_request" => Ok(InquiryCategory::FeatureRequest),
    "other" => Ok(InquiryCategory::Other),
    o => Err(Error::Decode(format!("unknown inquiry category: {o:?}"))),
  }
}

// ─── Streaming links ─────────────────────────────────────────────────────────

pub fn encode_streaming(links: &StreamingLinks) -> Result<String> {
  Ok(serde_json::to_string(links)?)
}

pub fn decode_streaming(s: &str) -> Result<StreamingLinks> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `submissions` row.
pub struct RawSubmission {
  pub submission_id: String,
  pub kind:          String,
  pub owner_id:      Option<String>,
  pub payload_json:  String,
  pub created_at:    String,
}

impl RawSubmission {
  pub fn into_submission(self) -> Result<Submission> {
    let data: serde_json::Value = serde_json::from_str(&self.payload_json)?;
    let payload = SubmissionPayload::from_parts(&self.kind, data)
      .map_err(Error::Core)?;

    Ok(Submission {
      submission_id: decode_uuid(&self.submission_id)?,
      owner_id:      decode_opt_uuid(self.owner_id.as_deref())?,
      payload,
      // Terminal states are deleted, so a stored row is always pending.
      status:        SubmissionStatus::Pending,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from an `artists` row.
pub struct RawArtist {
  pub artist_id:   String,
  pub name:        String,
  pub reading:     Option<String>,
  pub profile_url: Option<String>,
  pub created_at:  String,
}

impl RawArtist {
  pub fn into_artist(self) -> Result<Artist> {
    Ok(Artist {
      artist_id:   decode_uuid(&self.artist_id)?,
      name:        self.name,
      reading:     self.reading,
      profile_url: self.profile_url,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `songs` row.
pub struct RawSong {
  pub song_id:        String,
  pub title:          String,
  pub artist_id:      Option<String>,
  pub streaming_json: String,
  pub created_at:     String,
}

impl RawSong {
  pub fn into_song(self) -> Result<Song> {
    Ok(Song {
      song_id:    decode_uuid(&self.song_id)?,
      title:      self.title,
      artist_id:  decode_opt_uuid(self.artist_id.as_deref())?,
      streaming:  decode_streaming(&self.streaming_json)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `chants` row.
pub struct RawChant {
  pub chant_id:       String,
  pub title:          String,
  pub content:        String,
  pub measures:       i64,
  pub reference_url:  Option<String>,
  pub owner_id:       Option<String>,
  pub bookmark_count: i64,
  pub created_at:     String,
}

impl RawChant {
  pub fn into_chant(self) -> Result<Chant> {
    Ok(Chant {
      chant_id:       decode_uuid(&self.chant_id)?,
      title:          self.title,
      content:        self.content,
      measures:       u32::try_from(self.measures)
        .map_err(|_| Error::Decode(format!("bad measures: {}", self.measures)))?,
      reference_url:  self.reference_url,
      owner_id:       decode_opt_uuid(self.owner_id.as_deref())?,
      bookmark_count: u32::try_from(self.bookmark_count.max(0))
        .unwrap_or(u32::MAX),
      created_at:     decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `call_charts` row.
pub struct RawChart {
  pub chart_id:   String,
  pub title:      String,
  pub song_id:    Option<String>,
  pub owner_id:   String,
  pub status:     String,
  pub created_at: String,
}

impl RawChart {
  pub fn into_chart(self) -> Result<CallChart> {
    Ok(CallChart {
      chart_id:   decode_uuid(&self.chart_id)?,
      title:      self.title,
      song_id:    decode_opt_uuid(self.song_id.as_deref())?,
      owner_id:   decode_uuid(&self.owner_id)?,
      status:     decode_publish_status(&self.status)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `sections` row.
pub struct RawSection {
  pub section_id: String,
  pub chart_id:   String,
  pub position:   i64,
  pub location:   String,
  pub content:    String,
  pub chant_id:   Option<String>,
}

impl RawSection {
  pub fn into_section(self) -> Result<Section> {
    Ok(Section {
      section_id: decode_uuid(&self.section_id)?,
      chart_id:   decode_uuid(&self.chart_id)?,
      position:   u32::try_from(self.position)
        .map_err(|_| Error::Decode(format!("bad position: {}", self.position)))?,
      location:   self.location,
      content:    self.content,
      chant_id:   decode_opt_uuid(self.chant_id.as_deref())?,
    })
  }
}

/// Raw strings read directly from a `bulletin_posts` row.
pub struct RawPost {
  pub post_id:    String,
  pub title:      String,
  pub body:       String,
  pub event_date: Option<String>,
  pub url:        Option<String>,
  pub owner_id:   Option<String>,
  pub status:     String,
  pub created_at: String,
}

impl RawPost {
  pub fn into_post(self) -> Result<BulletinPost> {
    Ok(BulletinPost {
      post_id:    decode_uuid(&self.post_id)?,
      title:      self.title,
      body:       self.body,
      event_date: self.event_date.as_deref().map(decode_date).transpose()?,
      url:        self.url,
      owner_id:   decode_opt_uuid(self.owner_id.as_deref())?,
      status:     decode_publish_status(&self.status)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `reports` row.
pub struct RawReport {
  pub report_id:   String,
  pub target_kind: String,
  pub target_id:   String,
  pub category:    String,
  pub reason:      Option<String>,
  pub details:     Option<String>,
  pub reporter_id: Option<String>,
  pub status:      Option<String>,
  pub created_at:  String,
}

impl RawReport {
  pub fn into_report(self) -> Result<Report> {
    Ok(Report {
      report_id:   decode_uuid(&self.report_id)?,
      target:      ContentTarget {
        kind: decode_target_kind(&self.target_kind)?,
        id:   decode_uuid(&self.target_id)?,
      },
      category:    decode_report_category(&self.category)?,
      reason:      self.reason,
      details:     self.details,
      reporter_id: decode_opt_uuid(self.reporter_id.as_deref())?,
      status:      decode_report_status(self.status.as_deref())?,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `replies` row.
pub struct RawReply {
  pub reply_id:   String,
  pub content:    String,
  pub category:   String,
  pub response:   String,
  pub created_at: String,
}

impl RawReply {
  pub fn into_reply(self) -> Result<Reply> {
    Ok(Reply {
      reply_id:   decode_uuid(&self.reply_id)?,
      content:    self.content,
      category:   decode_inquiry_category(&self.category)?,
      response:   self.response,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `bookmarks` row.
pub struct RawBookmark {
  pub user_id:     String,
  pub target_kind: String,
  pub target_id:   String,
  pub category:    String,
  pub created_at:  String,
}

impl RawBookmark {
  pub fn into_bookmark(self) -> Result<Bookmark> {
    Ok(Bookmark {
      user_id:    decode_uuid(&self.user_id)?,
      target:     ContentTarget {
        kind: decode_target_kind(&self.target_kind)?,
        id:   decode_uuid(&self.target_id)?,
      },
      category:   decode_bookmark_category(&self.category)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
