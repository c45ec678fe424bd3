//! The decision engine — approve, reject, and reply over pending
//! submissions.
//!
//! Each transition is self-contained and idempotence-tolerant: a second
//! decision on an already-retired id finds nothing and is reported as such
//! (`reject`: success; `approve`/`reply`: `NotFound`, meaning
//! already-handled from the operator's point of view).
//!
//! Ordering invariant: the publish side effect (master-record or reply
//! insert) always precedes deletion of the submission row. A failed publish
//! aborts the transition with the submission intact, which is also the
//! retry mechanism — there is no automatic retry here.

use callboard_core::{
  identity::CurrentUser,
  record::{Artist, Chant, NewArtist, NewChant, NewReply, NewSong, Reply, Song},
  submission::SubmissionPayload,
  store::ContentStore,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{require_operator, Error, Result};

/// The master record created by an approval.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Published {
  Artist(Artist),
  Song(Song),
  Chant(Chant),
}

/// Approve a pending submission: publish its payload as a master record,
/// then retire the submission row.
///
/// Inquiries are not valid on this path; they only transition via
/// [`reply`].
pub async fn approve<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
) -> Result<Published>
where
  S: ContentStore,
{
  require_operator(operator)?;

  let submission = store
    .get_submission(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(id))?;

  let published = match submission.payload {
    SubmissionPayload::Artist(d) => Published::Artist(
      store
        .add_artist(NewArtist {
          name:        d.name,
          reading:     d.reading,
          profile_url: d.profile_url,
        })
        .await
        .map_err(Error::store)?,
    ),
    SubmissionPayload::Song(d) => Published::Song(
      store
        .add_song(NewSong {
          title:     d.title,
          artist_id: d.artist_id,
          streaming: d.streaming,
        })
        .await
        .map_err(Error::store)?,
    ),
    SubmissionPayload::Chant(d) => {
      // Intake guarantees this resolves, but drafts written by older
      // clients may predate that check.
      let measures = d.resolved_measures().ok_or_else(|| {
        Error::validation("bar count must be a positive integer")
      })?;
      Published::Chant(
        store
          .add_chant(NewChant {
            title:         d.title,
            content:       d.content,
            measures,
            reference_url: d.reference_url,
            owner_id:      submission.owner_id,
          })
          .await
          .map_err(Error::store)?,
      )
    }
    SubmissionPayload::Inquiry(_) => {
      return Err(Error::validation(
        "inquiries are resolved with reply, not approve",
      ));
    }
  };

  // Publish first, retire second. If this delete fails the row stays
  // pending and the operator's retry re-runs an already-applied publish;
  // the request itself is never lost.
  store.delete_submission(id).await.map_err(Error::store)?;

  tracing::info!(%id, "submission approved and published");
  Ok(published)
}

/// Reject a pending submission: delete the row, nothing else.
///
/// Deleting an already-absent id is success — a double-click or a raced
/// second decision must not surface as an error.
pub async fn reject<S>(store: &S, operator: &CurrentUser, id: Uuid) -> Result<()>
where
  S: ContentStore,
{
  require_operator(operator)?;
  store.delete_submission(id).await.map_err(Error::store)?;
  tracing::info!(%id, "submission rejected");
  Ok(())
}

/// Resolve an inquiry: write a durable [`Reply`] copying the inquiry's
/// content, then retire the submission. Same ordering invariant as
/// [`approve`].
pub async fn reply<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
  response: &str,
) -> Result<Reply>
where
  S: ContentStore,
{
  require_operator(operator)?;

  let response = response.trim();
  if response.is_empty() {
    return Err(Error::validation("reply text is required"));
  }

  let submission = store
    .get_submission(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(id))?;

  let SubmissionPayload::Inquiry(inquiry) = submission.payload else {
    return Err(Error::validation("only inquiries can be replied to"));
  };

  let reply = store
    .add_reply(NewReply {
      content:  inquiry.content,
      category: inquiry.category,
      response: response.to_owned(),
    })
    .await
    .map_err(Error::store)?;

  store.delete_submission(id).await.map_err(Error::store)?;

  tracing::info!(%id, reply = %reply.reply_id, "inquiry replied");
  Ok(reply)
}
