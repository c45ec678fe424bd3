//! Pipeline tests against the in-memory SQLite store.
//!
//! `FlakyStore` wraps the real backend and fails selected inserts on
//! demand, which is how the publish-before-retire ordering is exercised.

use std::sync::atomic::{AtomicBool, Ordering};

use callboard_core::{
  bookmark::{Bookmark, BookmarkCategory},
  identity::{CurrentUser, Role},
  record::{
    Artist, BulletinPost, CallChart, Chant, ChartView, ContentTarget,
    NewArtist, NewBulletinPost, NewChant, NewChart, NewReply, NewSong,
    PublishStatus, Reply, Song,
  },
  report::{NewReport, Report, ReportCategory, ReportStatus},
  submission::{
    ArtistDraft, ChantDraft, InquiryCategory, InquiryDraft, NewSubmission,
    SongDraft, Submission, SubmissionKind, SubmissionPayload,
  },
  store::{BookmarkWrite, ContentStore, PendingCounts},
};
use callboard_store_sqlite::SqliteStore;
use uuid::Uuid;

use crate::{
  bookmark::{self, BookmarkChange},
  bulletin, decision,
  decision::Published,
  intake::{self, BulletinDraft, ChartDraft as ChartInput, ReportDraft, SectionDraft},
  queue, triage, Error,
};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn operator() -> CurrentUser {
  CurrentUser { user_id: Uuid::new_v4(), role: Role::Operator }
}

fn member() -> CurrentUser {
  CurrentUser { user_id: Uuid::new_v4(), role: Role::Member }
}

fn chant_payload() -> SubmissionPayload {
  SubmissionPayload::Chant(ChantDraft {
    title:         "Example".into(),
    content:       "Call!".into(),
    measures:      Some(8),
    bars:          None,
    reference_url: None,
    remarks:       None,
  })
}

fn inquiry_payload() -> SubmissionPayload {
  SubmissionPayload::Inquiry(InquiryDraft {
    content:  "Why no dark mode?".into(),
    category: InquiryCategory::FeatureRequest,
  })
}

// ─── Intake ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn intake_requires_identity() {
  let s = store().await;
  let err = intake::submit(&s, None, chant_payload()).await.unwrap_err();
  assert!(matches!(err, Error::Auth(_)));
  assert!(s.list_submissions(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn intake_empty_artist_name_writes_nothing() {
  let s = store().await;
  let user = member();

  let err = intake::submit(
    &s,
    Some(&user),
    SubmissionPayload::Artist(ArtistDraft {
      name:        "   ".into(),
      reading:     None,
      profile_url: Some("https://example.com".into()),
    }),
  )
  .await
  .unwrap_err();

  assert!(matches!(err, Error::Validation(_)));
  assert!(s.list_submissions(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn intake_rejects_unparsable_bar_count() {
  let s = store().await;
  let user = member();

  let err = intake::submit(
    &s,
    Some(&user),
    SubmissionPayload::Chant(ChantDraft {
      title:         "T".into(),
      content:       "C".into(),
      measures:      None,
      bars:          Some("about eight".into()),
      reference_url: None,
      remarks:       None,
    }),
  )
  .await
  .unwrap_err();

  assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn abuse_report_requires_reason() {
  let s = store().await;
  let user = member();

  let err = intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::chant(Uuid::new_v4()),
      category: ReportCategory::Abuse,
      reason:   None,
      details:  None,
    },
  )
  .await
  .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  // A correction needs no reason.
  intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::chant(Uuid::new_v4()),
      category: ReportCategory::Correction,
      reason:   None,
      details:  Some("wrong bar count".into()),
    },
  )
  .await
  .unwrap();
}

#[tokio::test]
async fn chart_publishes_immediately_as_author() {
  let s = store().await;
  let user = member();

  let chart = intake::publish_chart(
    &s,
    Some(&user),
    ChartInput {
      title:    "Calls for Future Diver".into(),
      song_id:  None,
      sections: vec![SectionDraft {
        location: "chorus".into(),
        content:  "jump".into(),
        chant_id: None,
      }],
    },
  )
  .await
  .unwrap();

  assert_eq!(chart.status, PublishStatus::Approved);
  assert_eq!(chart.owner_id, user.user_id);
  // No submission row was created; charts bypass the queue.
  assert!(s.list_submissions(None).await.unwrap().is_empty());
}

// ─── Decision engine ─────────────────────────────────────────────────────────

#[tokio::test]
async fn chant_approval_publishes_then_retires() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&s, Some(&user), chant_payload()).await.unwrap();

  // Visible in the pending chant queue.
  let entries = queue::pending_submissions(&s, Some(SubmissionKind::Chant))
    .await
    .unwrap();
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].submission.submission_id, submission.submission_id);

  let published = decision::approve(&s, &op, submission.submission_id)
    .await
    .unwrap();
  let Published::Chant(chant) = published else {
    panic!("expected a chant");
  };
  assert_eq!(chant.content, "Call!");
  assert_eq!(chant.measures, 8);
  assert_eq!(chant.owner_id, Some(user.user_id));
  assert_eq!(chant.bookmark_count, 0);

  // The master record is queryable; the submission is gone.
  assert!(s.get_chant(chant.chant_id).await.unwrap().is_some());
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_none());
}

#[tokio::test]
async fn legacy_bars_field_is_the_fallback() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission = intake::submit(
    &s,
    Some(&user),
    SubmissionPayload::Chant(ChantDraft {
      title:         "Old client".into(),
      content:       "Call!".into(),
      measures:      None,
      bars:          Some("12".into()),
      reference_url: None,
      remarks:       None,
    }),
  )
  .await
  .unwrap();

  let Published::Chant(chant) =
    decision::approve(&s, &op, submission.submission_id).await.unwrap()
  else {
    panic!("expected a chant");
  };
  assert_eq!(chant.measures, 12);
}

#[tokio::test]
async fn measures_takes_precedence_over_bars() {
  let draft = ChantDraft {
    title:         "T".into(),
    content:       "C".into(),
    measures:      Some(8),
    bars:          Some("12".into()),
    reference_url: None,
    remarks:       None,
  };
  assert_eq!(draft.resolved_measures(), Some(8));
}

#[tokio::test]
async fn approve_failure_leaves_submission_pending() {
  let flaky = FlakyStore::new(store().await);
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&flaky, Some(&user), chant_payload()).await.unwrap();

  flaky.fail_chant_insert.store(true, Ordering::SeqCst);
  let err = decision::approve(&flaky, &op, submission.submission_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Store(_)));

  // The submission survived the failed publish and the operator can retry.
  assert!(flaky
    .inner
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_some());

  flaky.fail_chant_insert.store(false, Ordering::SeqCst);
  decision::approve(&flaky, &op, submission.submission_id)
    .await
    .unwrap();
  assert!(flaky
    .inner
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_none());
}

#[tokio::test]
async fn reply_failure_leaves_submission_pending() {
  let flaky = FlakyStore::new(store().await);
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&flaky, Some(&user), inquiry_payload()).await.unwrap();

  flaky.fail_reply_insert.store(true, Ordering::SeqCst);
  let err = decision::reply(&flaky, &op, submission.submission_id, "Soon")
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Store(_)));
  assert!(flaky
    .inner
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_some());
}

#[tokio::test]
async fn reject_twice_is_a_noop() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&s, Some(&user), chant_payload()).await.unwrap();

  decision::reject(&s, &op, submission.submission_id).await.unwrap();
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_none());

  // The second reject finds nothing and still succeeds.
  decision::reject(&s, &op, submission.submission_id).await.unwrap();
}

#[tokio::test]
async fn approve_missing_id_publishes_nothing() {
  let s = store().await;
  let op = operator();

  let err = decision::approve(&s, &op, Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(_)));
  assert!(s.list_artists().await.unwrap().is_empty());
}

#[tokio::test]
async fn inquiry_reply_flow() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&s, Some(&user), inquiry_payload()).await.unwrap();

  let reply = decision::reply(&s, &op, submission.submission_id, "Coming soon")
    .await
    .unwrap();
  assert_eq!(reply.content, "Why no dark mode?");
  assert_eq!(reply.response, "Coming soon");
  assert_eq!(reply.category, InquiryCategory::FeatureRequest);

  assert_eq!(s.list_replies().await.unwrap().len(), 1);
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_none());
}

#[tokio::test]
async fn reply_requires_text() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&s, Some(&user), inquiry_payload()).await.unwrap();

  let err = decision::reply(&s, &op, submission.submission_id, "  ")
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  // Nothing was written and nothing was deleted.
  assert!(s.list_replies().await.unwrap().is_empty());
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_some());
}

#[tokio::test]
async fn approve_is_invalid_for_inquiries() {
  let s = store().await;
  let user = member();
  let op = operator();

  let submission =
    intake::submit(&s, Some(&user), inquiry_payload()).await.unwrap();

  let err = decision::approve(&s, &op, submission.submission_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_some());
}

#[tokio::test]
async fn decisions_require_operator_role() {
  let s = store().await;
  let user = member();

  let submission =
    intake::submit(&s, Some(&user), chant_payload()).await.unwrap();

  let err = decision::approve(&s, &user, submission.submission_id)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Auth(_)));
  assert!(s
    .get_submission(submission.submission_id)
    .await
    .unwrap()
    .is_some());
}

// ─── Queue ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn song_queue_joins_artist_name() {
  let s = store().await;
  let user = member();

  let artist = s
    .add_artist(NewArtist {
      name:        "Dempagumi".into(),
      reading:     None,
      profile_url: None,
    })
    .await
    .unwrap();

  intake::submit(
    &s,
    Some(&user),
    SubmissionPayload::Song(SongDraft {
      title:     "Future Diver".into(),
      artist_id: Some(artist.artist_id),
      streaming: Default::default(),
    }),
  )
  .await
  .unwrap();

  let entries = queue::pending_submissions(&s, Some(SubmissionKind::Song))
    .await
    .unwrap();
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].related_artist.as_deref(), Some("Dempagumi"));
}

#[tokio::test]
async fn pending_counts_cover_every_funnel() {
  let s = store().await;
  let user = member();

  intake::submit(&s, Some(&user), chant_payload()).await.unwrap();
  intake::submit(&s, Some(&user), inquiry_payload()).await.unwrap();
  intake::submit_bulletin(
    &s,
    Some(&user),
    BulletinDraft {
      title:      "Live".into(),
      body:       "come".into(),
      event_date: None,
      url:        None,
    },
  )
  .await
  .unwrap();
  intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::chant(Uuid::new_v4()),
      category: ReportCategory::Correction,
      reason:   None,
      details:  None,
    },
  )
  .await
  .unwrap();

  let counts = queue::pending_counts(&s).await.unwrap();
  assert_eq!(counts.chants, 1);
  assert_eq!(counts.inquiries, 1);
  assert_eq!(counts.bulletin_posts, 1);
  assert_eq!(counts.reports, 1);
  assert_eq!(counts.total(), 4);
}

// ─── Bulletin review ─────────────────────────────────────────────────────────

#[tokio::test]
async fn bulletin_approval_is_an_in_place_flip() {
  let s = store().await;
  let user = member();
  let op = operator();

  let post = intake::submit_bulletin(
    &s,
    Some(&user),
    BulletinDraft {
      title:      "Release event".into(),
      body:       "details".into(),
      event_date: None,
      url:        None,
    },
  )
  .await
  .unwrap();

  let approved = bulletin::approve_post(&s, &op, post.post_id).await.unwrap();
  assert_eq!(approved.status, PublishStatus::Approved);
  assert_eq!(approved.post_id, post.post_id);

  // Repeated approval is a no-op.
  bulletin::approve_post(&s, &op, post.post_id).await.unwrap();

  let fetched = s.get_post(post.post_id).await.unwrap().unwrap();
  assert_eq!(fetched.status, PublishStatus::Approved);
}

#[tokio::test]
async fn bulletin_rejection_deletes_the_row() {
  let s = store().await;
  let user = member();
  let op = operator();

  let post = intake::submit_bulletin(
    &s,
    Some(&user),
    BulletinDraft {
      title:      "Spam".into(),
      body:       "spam".into(),
      event_date: None,
      url:        None,
    },
  )
  .await
  .unwrap();

  bulletin::reject_post(&s, &op, post.post_id).await.unwrap();
  assert!(s.get_post(post.post_id).await.unwrap().is_none());

  // Rejecting again is success.
  bulletin::reject_post(&s, &op, post.post_id).await.unwrap();
}

// ─── Bookmarks ───────────────────────────────────────────────────────────────

async fn published_chant(s: &SqliteStore) -> Chant {
  s.add_chant(NewChant {
    title:         "Standard".into(),
    content:       "Tiger! Fire!".into(),
    measures:      8,
    reference_url: None,
    owner_id:      None,
  })
  .await
  .unwrap()
}

#[tokio::test]
async fn toggle_saves_then_unsaves() {
  let s = store().await;
  let user = member();
  let chant = published_chant(&s).await;
  let target = ContentTarget::chant(chant.chant_id);

  let change = bookmark::toggle(&s, &user, target).await.unwrap();
  let BookmarkChange::Saved(b) = change else {
    panic!("expected a save");
  };
  assert_eq!(b.category, BookmarkCategory::Practice);
  assert_eq!(
    s.get_chant(chant.chant_id).await.unwrap().unwrap().bookmark_count,
    1
  );

  let change = bookmark::toggle(&s, &user, target).await.unwrap();
  assert!(matches!(change, BookmarkChange::Removed));
  assert!(s.get_bookmark(user.user_id, target).await.unwrap().is_none());
  assert_eq!(
    s.get_chant(chant.chant_id).await.unwrap().unwrap().bookmark_count,
    0
  );
}

#[tokio::test]
async fn raced_double_toggle_leaves_exactly_one_row() {
  let flaky = FlakyStore::new(store().await);
  let user = member();
  let target = ContentTarget::chant(Uuid::new_v4());

  // Both toggles read "absent": the second create loses to the uniqueness
  // constraint, which must be absorbed, not surfaced.
  flaky.hide_bookmarks.store(true, Ordering::SeqCst);
  bookmark::toggle(&flaky, &user, target).await.unwrap();
  bookmark::toggle(&flaky, &user, target).await.unwrap();

  let rows = flaky.inner.list_bookmarks(user.user_id, None).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].category, BookmarkCategory::Practice);
}

#[tokio::test]
async fn promote_walks_practice_to_favorite() {
  let s = store().await;
  let user = member();
  let target = ContentTarget::call_chart(Uuid::new_v4());

  bookmark::toggle(&s, &user, target).await.unwrap();

  let promoted = bookmark::promote(&s, &user, target).await.unwrap();
  assert_eq!(promoted.category, BookmarkCategory::Favorite);

  // From favorite: a no-op, never a duplicate or a regression.
  let again = bookmark::promote(&s, &user, target).await.unwrap();
  assert_eq!(again.category, BookmarkCategory::Favorite);

  let rows = s.list_bookmarks(user.user_id, None).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].category, BookmarkCategory::Favorite);
}

#[tokio::test]
async fn promote_from_absent_is_invalid() {
  let s = store().await;
  let user = member();

  let err =
    bookmark::promote(&s, &user, ContentTarget::chant(Uuid::new_v4()))
      .await
      .unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
}

// ─── Report triage ───────────────────────────────────────────────────────────

#[tokio::test]
async fn triage_never_touches_the_target() {
  let s = store().await;
  let user = member();
  let op = operator();

  let chant = published_chant(&s).await;
  let report = intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::chant(chant.chant_id),
      category: ReportCategory::Correction,
      reason:   None,
      details:  Some("typo in the second call".into()),
    },
  )
  .await
  .unwrap();

  let before = s.get_chant(chant.chant_id).await.unwrap().unwrap();
  let resolved = triage::resolve(&s, &op, report.report_id).await.unwrap();
  assert_eq!(resolved.status, ReportStatus::Resolved);
  let after = s.get_chant(chant.chant_id).await.unwrap().unwrap();

  assert_eq!(before.title, after.title);
  assert_eq!(before.content, after.content);
  assert_eq!(before.measures, after.measures);
  assert_eq!(before.bookmark_count, after.bookmark_count);
}

#[tokio::test]
async fn triage_on_terminal_report_is_a_noop() {
  let s = store().await;
  let user = member();
  let op = operator();

  let report = intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::call_chart(Uuid::new_v4()),
      category: ReportCategory::Correction,
      reason:   None,
      details:  None,
    },
  )
  .await
  .unwrap();

  triage::resolve(&s, &op, report.report_id).await.unwrap();
  // A second decision (double-click, or a different verdict) leaves the
  // stored state alone.
  let still = triage::ignore(&s, &op, report.report_id).await.unwrap();
  assert_eq!(still.status, ReportStatus::Resolved);

  let fetched = s.get_report(report.report_id).await.unwrap().unwrap();
  assert_eq!(fetched.status, ReportStatus::Resolved);
}

#[tokio::test]
async fn triage_requires_operator_role() {
  let s = store().await;
  let user = member();

  let report = intake::file_report(
    &s,
    Some(&user),
    ReportDraft {
      target:   ContentTarget::chant(Uuid::new_v4()),
      category: ReportCategory::Correction,
      reason:   None,
      details:  None,
    },
  )
  .await
  .unwrap();

  let err = triage::resolve(&s, &user, report.report_id).await.unwrap_err();
  assert!(matches!(err, Error::Auth(_)));
}

// ─── Fault-injection wrapper ─────────────────────────────────────────────────

/// Delegates everything to an inner [`SqliteStore`], with switches to fail
/// the publish inserts and to hide bookmark reads (simulating a stale read
/// under a raced toggle).
struct FlakyStore {
  inner:             SqliteStore,
  fail_chant_insert: AtomicBool,
  fail_reply_insert: AtomicBool,
  hide_bookmarks:    AtomicBool,
}

impl FlakyStore {
  fn new(inner: SqliteStore) -> Self {
    Self {
      inner,
      fail_chant_insert: AtomicBool::new(false),
      fail_reply_insert: AtomicBool::new(false),
      hide_bookmarks:    AtomicBool::new(false),
    }
  }

  fn injected() -> callboard_store_sqlite::Error {
    callboard_store_sqlite::Error::Decode("injected write failure".into())
  }
}

impl ContentStore for FlakyStore {
  type Error = callboard_store_sqlite::Error;

  async fn add_submission(
    &self,
    input: NewSubmission,
  ) -> Result<Submission, Self::Error> {
    self.inner.add_submission(input).await
  }

  async fn get_submission(
    &self,
    id: Uuid,
  ) -> Result<Option<Submission>, Self::Error> {
    self.inner.get_submission(id).await
  }

  async fn list_submissions(
    &self,
    kind: Option<SubmissionKind>,
  ) -> Result<Vec<Submission>, Self::Error> {
    self.inner.list_submissions(kind).await
  }

  async fn delete_submission(&self, id: Uuid) -> Result<(), Self::Error> {
    self.inner.delete_submission(id).await
  }

  async fn pending_counts(&self) -> Result<PendingCounts, Self::Error> {
    self.inner.pending_counts().await
  }

  async fn add_artist(&self, input: NewArtist) -> Result<Artist, Self::Error> {
    self.inner.add_artist(input).await
  }

  async fn get_artist(&self, id: Uuid) -> Result<Option<Artist>, Self::Error> {
    self.inner.get_artist(id).await
  }

  async fn list_artists(&self) -> Result<Vec<Artist>, Self::Error> {
    self.inner.list_artists().await
  }

  async fn add_song(&self, input: NewSong) -> Result<Song, Self::Error> {
    self.inner.add_song(input).await
  }

  async fn list_songs(&self) -> Result<Vec<Song>, Self::Error> {
    self.inner.list_songs().await
  }

  async fn add_chant(&self, input: NewChant) -> Result<Chant, Self::Error> {
    if self.fail_chant_insert.load(Ordering::SeqCst) {
      return Err(Self::injected());
    }
    self.inner.add_chant(input).await
  }

  async fn get_chant(&self, id: Uuid) -> Result<Option<Chant>, Self::Error> {
    self.inner.get_chant(id).await
  }

  async fn adjust_chant_bookmarks(
    &self,
    id: Uuid,
    delta: i64,
  ) -> Result<(), Self::Error> {
    self.inner.adjust_chant_bookmarks(id, delta).await
  }

  async fn add_reply(&self, input: NewReply) -> Result<Reply, Self::Error> {
    if self.fail_reply_insert.load(Ordering::SeqCst) {
      return Err(Self::injected());
    }
    self.inner.add_reply(input).await
  }

  async fn list_replies(&self) -> Result<Vec<Reply>, Self::Error> {
    self.inner.list_replies().await
  }

  async fn add_chart(&self, input: NewChart) -> Result<CallChart, Self::Error> {
    self.inner.add_chart(input).await
  }

  async fn get_chart(&self, id: Uuid) -> Result<Option<ChartView>, Self::Error> {
    self.inner.get_chart(id).await
  }

  async fn add_post(
    &self,
    input: NewBulletinPost,
  ) -> Result<BulletinPost, Self::Error> {
    self.inner.add_post(input).await
  }

  async fn get_post(
    &self,
    id: Uuid,
  ) -> Result<Option<BulletinPost>, Self::Error> {
    self.inner.get_post(id).await
  }

  async fn list_posts(
    &self,
    status: Option<PublishStatus>,
  ) -> Result<Vec<BulletinPost>, Self::Error> {
    self.inner.list_posts(status).await
  }

  async fn set_post_status(
    &self,
    id: Uuid,
    status: PublishStatus,
  ) -> Result<(), Self::Error> {
    self.inner.set_post_status(id, status).await
  }

  async fn delete_post(&self, id: Uuid) -> Result<(), Self::Error> {
    self.inner.delete_post(id).await
  }

  async fn add_report(&self, input: NewReport) -> Result<Report, Self::Error> {
    self.inner.add_report(input).await
  }

  async fn get_report(&self, id: Uuid) -> Result<Option<Report>, Self::Error> {
    self.inner.get_report(id).await
  }

  async fn list_reports(
    &self,
    status: Option<ReportStatus>,
  ) -> Result<Vec<Report>, Self::Error> {
    self.inner.list_reports(status).await
  }

  async fn set_report_status(
    &self,
    id: Uuid,
    status: ReportStatus,
  ) -> Result<(), Self::Error> {
    self.inner.set_report_status(id, status).await
  }

  async fn get_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> Result<Option<Bookmark>, Self::Error> {
    if self.hide_bookmarks.load(Ordering::SeqCst) {
      return Ok(None);
    }
    self.inner.get_bookmark(user_id, target).await
  }

  async fn list_bookmarks(
    &self,
    user_id: Uuid,
    category: Option<BookmarkCategory>,
  ) -> Result<Vec<Bookmark>, Self::Error> {
    self.inner.list_bookmarks(user_id, category).await
  }

  async fn add_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> Result<BookmarkWrite, Self::Error> {
    self.inner.add_bookmark(user_id, target, category).await
  }

  async fn set_bookmark_category(
    &self,
    user_id: Uuid,
    target: ContentTarget,
    category: BookmarkCategory,
  ) -> Result<(), Self::Error> {
    self.inner.set_bookmark_category(user_id, target, category).await
  }

  async fn delete_bookmark(
    &self,
    user_id: Uuid,
    target: ContentTarget,
  ) -> Result<(), Self::Error> {
    self.inner.delete_bookmark(user_id, target).await
  }
}
