//! Bulletin-post intake and review handlers.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use callboard_core::{
  record::{BulletinPost, PublishStatus},
  store::ContentStore,
};
use callboard_moderation::{
  bulletin,
  intake::{self, BulletinDraft},
  queue,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth, AppState, ApiError};

/// `POST /bulletin`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(draft): Json<BulletinDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::identify(&headers, &state.auth);
  let post =
    intake::submit_bulletin(state.store.as_ref(), user.as_ref(), draft)
      .await?;
  Ok((StatusCode::CREATED, Json(post)))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<PublishStatus>,
}

/// `GET /bulletin[?status=pending|approved]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<BulletinPost>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let posts =
    queue::bulletin_queue(state.store.as_ref(), params.status).await?;
  Ok(Json(posts))
}

/// `POST /bulletin/:id/approve`
pub async fn approve<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
) -> Result<Json<BulletinPost>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  let post =
    bulletin::approve_post(state.store.as_ref(), &operator, id).await?;
  Ok(Json(post))
}

/// `POST /bulletin/:id/reject`
pub async fn reject<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  bulletin::reject_post(state.store.as_ref(), &operator, id).await?;
  Ok(StatusCode::NO_CONTENT)
}
