//! Bulletin-post review.
//!
//! Structurally the same funnel as submissions, but approval never produces
//! a second record — the post already *is* the content, so accepting it is
//! a pure in-place status flip and rejecting it deletes the row outright.

use callboard_core::{
  identity::CurrentUser,
  record::{BulletinPost, PublishStatus},
  store::ContentStore,
};
use uuid::Uuid;

use crate::{require_operator, Error, Result};

/// Approve a bulletin post in place.
pub async fn approve_post<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
) -> Result<BulletinPost>
where
  S: ContentStore,
{
  require_operator(operator)?;

  let post = store
    .get_post(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(id))?;

  if post.status == PublishStatus::Approved {
    // Already live; a repeated approve is a no-op.
    return Ok(post);
  }

  store
    .set_post_status(id, PublishStatus::Approved)
    .await
    .map_err(Error::store)?;

  tracing::info!(%id, "bulletin post approved");
  Ok(BulletinPost { status: PublishStatus::Approved, ..post })
}

/// Reject a bulletin post: delete the row outright. Deleting an absent id
/// is success.
pub async fn reject_post<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
) -> Result<()>
where
  S: ContentStore,
{
  require_operator(operator)?;
  store.delete_post(id).await.map_err(Error::store)?;
  tracing::info!(%id, "bulletin post rejected");
  Ok(())
}
