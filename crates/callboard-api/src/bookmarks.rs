//! Bookmark handlers: toggle, promote, and per-user listing.

use axum::{
  Json,
  extract::{Query, State},
  http::HeaderMap,
};
use callboard_core::{
  bookmark::{Bookmark, BookmarkCategory},
  record::ContentTarget,
  store::ContentStore,
};
use callboard_moderation::bookmark::{self, BookmarkChange};
use serde::Deserialize;

use crate::{auth, AppState, ApiError};

/// `POST /bookmarks` — body is a [`ContentTarget`]; saves an unsaved target
/// or removes a saved one.
pub async fn toggle<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(target): Json<ContentTarget>,
) -> Result<Json<BookmarkChange>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::require_identity(&headers, &state.auth)?;
  let change = bookmark::toggle(state.store.as_ref(), &user, target).await?;
  Ok(Json(change))
}

/// `POST /bookmarks/promote` — body is a [`ContentTarget`]; moves the
/// caller's bookmark from `practice` to `favorite`.
pub async fn promote<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(target): Json<ContentTarget>,
) -> Result<Json<Bookmark>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::require_identity(&headers, &state.auth)?;
  let bookmark =
    bookmark::promote(state.store.as_ref(), &user, target).await?;
  Ok(Json(bookmark))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub category: Option<BookmarkCategory>,
}

/// `GET /bookmarks[?category=practice|favorite]` — the caller's bookmarks,
/// newest first.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Bookmark>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::require_identity(&headers, &state.auth)?;
  let bookmarks = state
    .store
    .list_bookmarks(user.user_id, params.category)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(bookmarks))
}
