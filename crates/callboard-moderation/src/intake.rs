//! Submission intake — the validated write side for members.
//!
//! Every intake path requires an authenticated user. Validation is
//! kind-specific and happens before any write, so a failed intake leaves no
//! partial state. No uniqueness is enforced across submissions; duplicates
//! are resolved later by operator judgment.

use callboard_core::{
  identity::CurrentUser,
  record::{
    BulletinPost, CallChart, NewBulletinPost, NewChart, NewSection,
  },
  report::{NewReport, Report, ReportCategory},
  submission::{NewSubmission, Submission, SubmissionPayload},
  store::ContentStore,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{Error, Result};

fn required(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::validation(format!("{field} is required")));
  }
  Ok(())
}

fn require_user(user: Option<&CurrentUser>) -> Result<&CurrentUser> {
  user.ok_or(Error::Auth("sign in to submit content"))
}

// ─── Submissions ─────────────────────────────────────────────────────────────

/// Validate and persist one pending submission.
pub async fn submit<S>(
  store: &S,
  user: Option<&CurrentUser>,
  payload: SubmissionPayload,
) -> Result<Submission>
where
  S: ContentStore,
{
  let user = require_user(user)?;
  validate_payload(&payload)?;

  let submission = store
    .add_submission(NewSubmission {
      owner_id: Some(user.user_id),
      payload,
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(
    id = %submission.submission_id,
    kind = submission.payload.discriminant(),
    "submission accepted"
  );
  Ok(submission)
}

fn validate_payload(payload: &SubmissionPayload) -> Result<()> {
  match payload {
    SubmissionPayload::Artist(d) => {
      required("name", &d.name)?;
      match d.profile_url.as_deref() {
        Some(url) => required("profile_url", url),
        None => Err(Error::validation("profile_url is required")),
      }
    }
    SubmissionPayload::Song(d) => required("title", &d.title),
    SubmissionPayload::Chant(d) => {
      required("title", &d.title)?;
      required("content", &d.content)?;
      if d.resolved_measures().is_none() {
        return Err(Error::validation(
          "bar count must be a positive integer",
        ));
      }
      Ok(())
    }
    SubmissionPayload::Inquiry(d) => required("content", &d.content),
  }
}

// ─── Call charts ─────────────────────────────────────────────────────────────

/// Author input for a new call chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartDraft {
  pub title:    String,
  pub song_id:  Option<Uuid>,
  pub sections: Vec<SectionDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionDraft {
  pub location: String,
  pub content:  String,
  pub chant_id: Option<Uuid>,
}

/// Publish a call chart immediately, owned by the calling user.
///
/// Charts bypass the moderation queue by design: the stored row is already
/// `approved`. Their constituent chant templates, when new, still flow
/// through [`submit`].
pub async fn publish_chart<S>(
  store: &S,
  user: Option<&CurrentUser>,
  draft: ChartDraft,
) -> Result<CallChart>
where
  S: ContentStore,
{
  let user = require_user(user)?;
  required("title", &draft.title)?;
  for section in &draft.sections {
    required("location", &section.location)?;
    required("content", &section.content)?;
  }

  let chart = store
    .add_chart(NewChart {
      title:    draft.title,
      song_id:  draft.song_id,
      owner_id: user.user_id,
      sections: draft
        .sections
        .into_iter()
        .map(|s| NewSection {
          location: s.location,
          content:  s.content,
          chant_id: s.chant_id,
        })
        .collect(),
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(id = %chart.chart_id, "chart published");
  Ok(chart)
}

// ─── Bulletin posts ──────────────────────────────────────────────────────────

/// Member input for a new event announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct BulletinDraft {
  pub title:      String,
  pub body:       String,
  pub event_date: Option<NaiveDate>,
  pub url:        Option<String>,
}

/// Validate and persist one pending bulletin post.
pub async fn submit_bulletin<S>(
  store: &S,
  user: Option<&CurrentUser>,
  draft: BulletinDraft,
) -> Result<BulletinPost>
where
  S: ContentStore,
{
  let user = require_user(user)?;
  required("title", &draft.title)?;
  required("body", &draft.body)?;

  let post = store
    .add_post(NewBulletinPost {
      title:      draft.title,
      body:       draft.body,
      event_date: draft.event_date,
      url:        draft.url,
      owner_id:   Some(user.user_id),
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(id = %post.post_id, "bulletin post accepted");
  Ok(post)
}

// ─── Reports ─────────────────────────────────────────────────────────────────

/// Member input for a report against published content.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportDraft {
  pub target:   callboard_core::record::ContentTarget,
  pub category: ReportCategory,
  pub reason:   Option<String>,
  pub details:  Option<String>,
}

/// Validate and persist one pending report. The target itself is never
/// touched.
pub async fn file_report<S>(
  store: &S,
  user: Option<&CurrentUser>,
  draft: ReportDraft,
) -> Result<Report>
where
  S: ContentStore,
{
  let user = require_user(user)?;
  if draft.category == ReportCategory::Abuse {
    match draft.reason.as_deref() {
      Some(reason) => required("reason", reason)?,
      None => return Err(Error::validation("reason is required")),
    }
  }

  let report = store
    .add_report(NewReport {
      target:      draft.target,
      category:    draft.category,
      reason:      draft.reason,
      details:     draft.details,
      reporter_id: Some(user.user_id),
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(id = %report.report_id, "report filed");
  Ok(report)
}
