//! Read endpoints for published content, plus call-chart publication.
//!
//! Charts are author-published: `POST /charts` writes an `approved` row
//! immediately, with no queue in between.

use axum::{
  Json,
  extract::{Path, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use callboard_core::{
  record::{Artist, CallChart, Chant, ChartView, Reply, Song},
  store::ContentStore,
};
use callboard_moderation::intake::{self, ChartDraft};
use uuid::Uuid;

use crate::{auth, AppState, ApiError};

/// `POST /charts` — publish immediately as the calling user.
pub async fn create_chart<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(draft): Json<ChartDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::identify(&headers, &state.auth);
  let chart: CallChart =
    intake::publish_chart(state.store.as_ref(), user.as_ref(), draft).await?;
  Ok((StatusCode::CREATED, Json(chart)))
}

/// `GET /artists`
pub async fn artists<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let artists = state.store.list_artists().await.map_err(ApiError::store)?;
  Ok(Json(artists))
}

/// `GET /songs`
pub async fn songs<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Song>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let songs = state.store.list_songs().await.map_err(ApiError::store)?;
  Ok(Json(songs))
}

/// `GET /replies` — the public Q&A feed of answered inquiries.
pub async fn replies<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Reply>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let replies = state.store.list_replies().await.map_err(ApiError::store)?;
  Ok(Json(replies))
}

/// `GET /chants/:id`
pub async fn chant<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Chant>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let chant = state
    .store
    .get_chant(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("no chant {id}")))?;
  Ok(Json(chant))
}

/// `GET /charts/:id` — the chart row with its sections in position order.
pub async fn chart<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<ChartView>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let view = state
    .store
    .get_chart(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("no chart {id}")))?;
  Ok(Json(view))
}
