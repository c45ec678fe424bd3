//! The `ContentStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g.
//! `callboard-store-sqlite`). The moderation pipeline and the HTTP layer
//! depend on this abstraction, not on any concrete backend.
//!
//! Each write is independently committed; no cross-collection transaction is
//! assumed. The pipeline builds its ordering guarantees (publish before
//! retire) on top of that.

use std::future::Future;

use uuid::Uuid;

use crate::{
  bookmark::{Bookmark, BookmarkCategory},
  record::{
    Artist, BulletinPost, CallChart, Chant, ChartView, ContentTarget,
    NewArtist, NewBulletinPost, NewChant, NewChart, NewReply, NewSong,
    PublishStatus, Reply, Song,
  },
  report::{NewReport, Report, ReportStatus},
  submission::{NewSubmission, Submission, SubmissionKind},
};

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Pending-work tallies for operator badge display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PendingCounts {
  pub artists:        usize,
  pub songs:          usize,
  pub chants:         usize,
  pub inquiries:      usize,
  pub bulletin_posts: usize,
  pub reports:        usize,
}

impl PendingCounts {
  pub fn total(&self) -> usize {
    self.artists
      + self.songs
      + self.chants
      + self.inquiries
      + self.bulletin_posts
      + self.reports
  }
}

/// Outcome of a bookmark insert. The uniqueness constraint on
/// (user, target) is enforced by the backend; a violation is reported
/// in-band here rather than as an error, so callers can treat a duplicate
/// create as a successful no-op.
#[derive(Debug, Clone)]
pub enum BookmarkWrite {
  Created(Bookmark),
  /// A row for this (user, target) already existed; nothing was written.
  Duplicate,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Callboard content store backend.
///
/// Per-collection create/read/update/delete, nothing more: state-machine
/// logic lives in `callboard-moderation`, not in backends. `delete_*`
/// methods do not distinguish not-found from success.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Submissions ───────────────────────────────────────────────────────

  /// Persist a new submission with status `pending`. `created_at` is set by
  /// the store.
  fn add_submission(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;

  /// Retrieve a submission by id. Returns `None` if not found.
  fn get_submission(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Submission>, Self::Error>> + Send + '_;

  /// List pending submissions, newest first, optionally filtered by kind.
  fn list_submissions(
    &self,
    kind: Option<SubmissionKind>,
  ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send + '_;

  /// Delete a submission row. Deleting an absent id is success.
  fn delete_submission(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Pending tallies across all reviewable collections.
  fn pending_counts(
    &self,
  ) -> impl Future<Output = Result<PendingCounts, Self::Error>> + Send + '_;

  // ── Master records ────────────────────────────────────────────────────

  fn add_artist(
    &self,
    input: NewArtist,
  ) -> impl Future<Output = Result<Artist, Self::Error>> + Send + '_;

  fn get_artist(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Artist>, Self::Error>> + Send + '_;

  /// List all published artists, newest first.
  fn list_artists(
    &self,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + '_;

  fn add_song(
    &self,
    input: NewSong,
  ) -> impl Future<Output = Result<Song, Self::Error>> + Send + '_;

  /// List all published songs, newest first.
  fn list_songs(
    &self,
  ) -> impl Future<Output = Result<Vec<Song>, Self::Error>> + Send + '_;

  fn add_chant(
    &self,
    input: NewChant,
  ) -> impl Future<Output = Result<Chant, Self::Error>> + Send + '_;

  fn get_chant(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Chant>, Self::Error>> + Send + '_;

  /// Adjust a chant's bookmark counter by `delta`, flooring at zero.
  /// Adjusting an absent id is a no-op.
  fn adjust_chant_bookmarks(
    &self,
    id: Uuid,
    delta: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn add_reply(
    &self,
    input: NewReply,
  ) -> impl Future<Output = Result<Reply, Self::Error>> + Send + '_;

  /// List all replies, newest first.
  fn list_replies(
    &self,
  ) -> impl Future<Output = Result<Vec<Reply>, Self::Error>> + Send + '_;

  // ── Call charts ───────────────────────────────────────────────────────

  /// Persist a chart and its sections. Charts are author-published: the
  /// stored row is already `approved`.
  fn add_chart(
    &self,
    input: NewChart,
  ) -> impl Future<Output = Result<CallChart, Self::Error>> + Send + '_;

  /// A chart with its sections in position order. `None` if not found.
  fn get_chart(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ChartView>, Self::Error>> + Send + '_;

  // ── Bulletin posts ────────────────────────────────────────────────────

  fn add_post(
    &self,
    input: NewBulletinPost,
  ) -> impl Future<Output = Result<BulletinPost, Self::Error>> + Send + '_;

  fn get_post(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<BulletinPost>, Self::Error>> + Send + '_;

  /// List posts, newest first, optionally filtered by status.
  fn list_posts(
    &self,
    status: Option<PublishStatus>,
  ) -> impl Future<Output = Result<Vec<BulletinPost>, Self::Error>> + Send + '_;

  /// In-place status flip. Errors if the post does not exist.
  fn set_post_status(
    &self,
    id: Uuid,
    status: PublishStatus,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a post row. Deleting an absent id is success.
  fn delete_post(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reports ───────────────────────────────────────────────────────────

  fn add_report(
    &self,
    input: NewReport,
  ) -> impl Future<Output = Result<Report, Self::Error>> + Send + '_;

  fn get_report(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Report>, Self::Error>> + Send + '_;

  /// List reports, newest first, optionally filtered by status.
  fn list_reports(
    &self,
    status: Option<ReportStatus>,
  ) -> impl Future<Output = Result<Vec<Report>, Self::Error>> + Send + '_;

  /// In-place status update. Errors if the report does not exist. Never
  /// touches the reported target.
  fn set_report_status(
    &self,
    id: Uuid,
    status: ReportStatus,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Bookmarks ─────────────────────────────────────────────────────────

  fn get_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> impl Future<Output = Result<Option<Bookmark>, Self::Error>> + Send + '_;

  /// List one member's bookmarks, newest first, optionally filtered by
  /// category.
  fn list_bookmarks(
    &self,
    user_id: Uuid,
    category: Option<BookmarkCategory>,
  ) -> impl Future<Output = Result<Vec<Bookmark>, Self::Error>> + Send + '_;

  /// Insert a bookmark row. A uniqueness violation on (user, target) is
  /// reported as [`BookmarkWrite::Duplicate`], not as an error.
  fn add_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> impl Future<Output = Result<BookmarkWrite, Self::Error>> + Send + '_;

  /// In-place category update. Errors if no row exists for the pair.
  fn set_bookmark_category(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete the bookmark row for the pair. Deleting an absent pair is
  /// success.
  fn delete_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
