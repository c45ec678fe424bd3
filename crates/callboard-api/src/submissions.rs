//! Handlers for submission intake, the moderation queue, and decisions.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/submissions` | Body: tagged [`SubmissionPayload`] |
//! | `GET`  | `/queue/submissions` | Optional `?kind=artist\|song\|chant\|inquiry` |
//! | `GET`  | `/queue/counts` | Pending tallies for badges |
//! | `POST` | `/submissions/:id/approve` | Operator only |
//! | `POST` | `/submissions/:id/reject` | Operator only |
//! | `POST` | `/submissions/:id/reply` | Operator only; body `{"response":"..."}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use callboard_core::{
  store::{ContentStore, PendingCounts},
  submission::{SubmissionKind, SubmissionPayload},
};
use callboard_moderation::{
  decision::{self, Published},
  intake,
  queue::{self, QueueEntry},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth, AppState, ApiError};

// ─── Intake ───────────────────────────────────────────────────────────────────

/// `POST /submissions` — body is the tagged payload union, e.g.
/// `{"kind":"chant","data":{...}}`.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(payload): Json<SubmissionPayload>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = auth::identify(&headers, &state.auth);
  let submission =
    intake::submit(state.store.as_ref(), user.as_ref(), payload).await?;
  Ok((StatusCode::CREATED, Json(submission)))
}

// ─── Queue ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QueueParams {
  pub kind: Option<SubmissionKind>,
}

/// `GET /queue/submissions[?kind=<kind>]`
pub async fn queue<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<QueueParams>,
) -> Result<Json<Vec<QueueEntry>>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let entries =
    queue::pending_submissions(state.store.as_ref(), params.kind).await?;
  Ok(Json(entries))
}

/// `GET /queue/counts`
pub async fn counts<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<PendingCounts>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(queue::pending_counts(state.store.as_ref()).await?))
}

// ─── Decisions ────────────────────────────────────────────────────────────────

/// `POST /submissions/:id/approve`
pub async fn approve<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
) -> Result<Json<Published>, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  let published =
    decision::approve(state.store.as_ref(), &operator, id).await?;
  Ok(Json(published))
}

/// `POST /submissions/:id/reject`
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
  decision::reject(state.store.as_ref(), &operator, id).await?;
  Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ReplyBody {
  pub response: String,
}

/// `POST /submissions/:id/reply` — body: `{"response":"..."}`.
pub async fn reply<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<Uuid>,
  Json(body): Json<ReplyBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let operator = auth::require_identity(&headers, &state.auth)?;
  let reply =
    decision::reply(state.store.as_ref(), &operator, id, &body.response)
      .await?;
  Ok((StatusCode::CREATED, Json(reply)))
}
