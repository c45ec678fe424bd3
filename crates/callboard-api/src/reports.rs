//! Report filing and triage handlers.

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use callboard_core::{
  report::{Report, ReportStatus},
  store::ContentStore,
};
use callboard_moderation::{
  intake::{self, ReportDraft},
  queue, triage,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth, AppState, ApiError};

/// `POST /reports`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(draft): Json<ReportDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::identify(&headers, &state.auth);
  let report =
    intake::file_report(state.store.as_ref(), user.as_ref(), draft).await?;
  Ok((StatusCode::CREATED, Json(report)))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<ReportStatus>,
}

/// `GET /reports[?status=pending|resolved|ignored]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Report>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let reports =
    queue::report_queue(state.store.as_ref(), params.status).await?;
  Ok(Json(reports))
}

/// `POST /reports/:id/resolve`
pub async fn resolve<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  let report = triage::resolve(state.store.as_ref(), &operator, id).await?;
  Ok(Json(report))
}

/// `POST /reports/:id/ignore`
pub async fn ignore<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  let report = triage::ignore(state.store.as_ref(), &operator, id).await?;
  Ok(Json(report))
}
