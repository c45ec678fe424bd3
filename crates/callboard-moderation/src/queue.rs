//! Moderation queue — the operator-facing read side.
//!
//! Pure projections over the store: pending submissions (newest first, with
//! referenced master records resolved for display), bulletin and report
//! listings, and the pending tallies driving badge counts. No mutation
//! happens here.

use callboard_core::{
  record::{BulletinPost, PublishStatus},
  report::{Report, ReportStatus},
  submission::{Submission, SubmissionKind, SubmissionPayload},
  store::{ContentStore, PendingCounts},
};
use serde::Serialize;

use crate::{Error, Result};

/// One pending submission as the operator sees it.
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntry {
  pub submission:     Submission,
  /// For song submissions, the display name of the referenced artist.
  pub related_artist: Option<String>,
}

/// Pending submissions, newest first, optionally restricted to one kind.
///
/// Song entries carry the referenced artist's name so the operator doesn't
/// review bare ids.
pub async fn pending_submissions<S>(
  store: &S,
  kind: Option<SubmissionKind>,
) -> Result<Vec<QueueEntry>>
where
  S: ContentStore,
{
  let submissions = store
    .list_submissions(kind)
    .await
    .map_err(Error::store)?;

  let mut entries = Vec::with_capacity(submissions.len());
  for submission in submissions {
    let related_artist = match &submission.payload {
      SubmissionPayload::Song(d) => match d.artist_id {
        Some(artist_id) => store
          .get_artist(artist_id)
          .await
          .map_err(Error::store)?
          .map(|a| a.name),
        None => None,
      },
      _ => None,
    };
    entries.push(QueueEntry { submission, related_artist });
  }
  Ok(entries)
}

/// Pending-work tallies for badge display.
pub async fn pending_counts<S>(store: &S) -> Result<PendingCounts>
where
  S: ContentStore,
{
  store.pending_counts().await.map_err(Error::store)
}

/// Bulletin posts, newest first, optionally filtered by status.
pub async fn bulletin_queue<S>(
  store: &S,
  status: Option<PublishStatus>,
) -> Result<Vec<BulletinPost>>
where
  S: ContentStore,
{
  store.list_posts(status).await.map_err(Error::store)
}

/// Reports, newest first, optionally filtered by status.
pub async fn report_queue<S>(
  store: &S,
  status: Option<ReportStatus>,
) -> Result<Vec<Report>>
where
  S: ContentStore,
{
  store.list_reports(status).await.map_err(Error::store)
}
