//! The bookmark state machine: absent → `practice` → `favorite`.
//!
//! `toggle` is the binary save/unsave affordance on content pages;
//! `promote` marks a practiced item as mastered. The store's uniqueness
//! constraint on (user, target) is the backstop against raced toggles: a
//! duplicate create is absorbed as success, never surfaced to the user.

use callboard_core::{
  bookmark::{Bookmark, BookmarkCategory},
  identity::CurrentUser,
  record::{ContentTarget, TargetKind},
  store::{BookmarkWrite, ContentStore},
};
use serde::Serialize;

use crate::{Error, Result};

/// Outcome of a [`toggle`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "change", content = "bookmark", rename_all = "lowercase")]
pub enum BookmarkChange {
  Saved(Bookmark),
  Removed,
}

/// Save an unsaved target as `practice`, or unsave a saved one (either
/// category).
pub async fn toggle<S>(
  store: &S,
  user: &CurrentUser,
  target: ContentTarget,
) -> Result<BookmarkChange>
where
  S: ContentStore,
{
  let existing = store
    .get_bookmark(user.user_id, target)
    .await
    .map_err(Error::store)?;

  if existing.is_some() {
    store
      .delete_bookmark(user.user_id, target)
      .await
      .map_err(Error::store)?;
    adjust_counter(store, target, -1).await?;
    return Ok(BookmarkChange::Removed);
  }

  match store
    .add_bookmark(user.user_id, target, BookmarkCategory::Practice)
    .await
    .map_err(Error::store)?
  {
    BookmarkWrite::Created(bookmark) => {
      adjust_counter(store, target, 1).await?;
      Ok(BookmarkChange::Saved(bookmark))
    }
    // A raced second toggle lost to the uniqueness constraint. The save
    // already happened; report whatever row won.
    BookmarkWrite::Duplicate => {
      match store
        .get_bookmark(user.user_id, target)
        .await
        .map_err(Error::store)?
      {
        Some(bookmark) => Ok(BookmarkChange::Saved(bookmark)),
        None => Ok(BookmarkChange::Removed),
      }
    }
  }
}

/// Promote a `practice` bookmark to `favorite`.
///
/// From `favorite` this is a no-op returning the row untouched; from absent
/// it is an invalid transition.
pub async fn promote<S>(
  store: &S,
  user: &CurrentUser,
  target: ContentTarget,
) -> Result<Bookmark>
where
  S: ContentStore,
{
  let bookmark = store
    .get_bookmark(user.user_id, target)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| {
      Error::validation("cannot promote a target that is not saved")
    })?;

  if bookmark.category == BookmarkCategory::Favorite {
    return Ok(bookmark);
  }

  store
    .set_bookmark_category(user.user_id, target, BookmarkCategory::Favorite)
    .await
    .map_err(Error::store)?;

  tracing::debug!(user = %user.user_id, target = %target.id, "bookmark promoted");
  Ok(Bookmark { category: BookmarkCategory::Favorite, ..bookmark })
}

/// Chant templates carry a public bookmark counter; charts do not.
/// The counter is best-effort and not transactional with the bookmark row.
async fn adjust_counter<S>(
  store: &S,
  target: ContentTarget,
  delta: i64,
) -> Result<()>
where
  S: ContentStore,
{
  if target.kind == TargetKind::Chant {
    store
      .adjust_chant_bookmarks(target.id, delta)
      .await
      .map_err(Error::store)?;
  }
  Ok(())
}
