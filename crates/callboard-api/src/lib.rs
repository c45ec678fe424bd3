//! JSON REST layer for Callboard.
//!
//! Exposes an axum [`Router`] backed by any
//! [`callboard_core::store::ContentStore`]. Identity is resolved per
//! request: the operator with HTTP Basic auth, members from the
//! gateway-supplied `X-User-Id` header (`auth` module). TLS and transport
//! concerns are the caller's responsibility.

pub mod auth;
pub mod bookmarks;
pub mod bulletin;
pub mod catalog;
pub mod error;
pub mod reports;
pub mod submissions;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use callboard_core::store::ContentStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;
pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                   String,
  pub port:                   u16,
  pub store_path:             PathBuf,
  pub operator_username:      String,
  /// Argon2 PHC string; generate with `server --hash-password`.
  pub operator_password_hash: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContentStore> {
  pub store: Arc<S>,
  pub auth:  Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(state: AppState<S>) -> Router<()>
where
  S: ContentStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Member intake
    .route("/submissions", post(submissions::create::<S>))
    .route("/charts", post(catalog::create_chart::<S>))
    .route("/bulletin", get(bulletin::list::<S>).post(bulletin::create::<S>))
    .route("/reports", get(reports::list::<S>).post(reports::create::<S>))
    // Operator queue + decisions
    .route("/queue/submissions", get(submissions::queue::<S>))
    .route("/queue/counts", get(submissions::counts::<S>))
    .route("/submissions/{id}/approve", post(submissions::approve::<S>))
    .route("/submissions/{id}/reject", post(submissions::reject::<S>))
    .route("/submissions/{id}/reply", post(submissions::reply::<S>))
    .route("/bulletin/{id}/approve", post(bulletin::approve::<S>))
    .route("/bulletin/{id}/reject", post(bulletin::reject::<S>))
    .route("/reports/{id}/resolve", post(reports::resolve::<S>))
    .route("/reports/{id}/ignore", post(reports::ignore::<S>))
    // Published catalog
    .route("/artists", get(catalog::artists::<S>))
    .route("/songs", get(catalog::songs::<S>))
    .route("/replies", get(catalog::replies::<S>))
    .route("/chants/{id}", get(catalog::chant::<S>))
    .route("/charts/{id}", get(catalog::chart::<S>))
    // Bookmarks
    .route(
      "/bookmarks",
      get(bookmarks::list::<S>).post(bookmarks::toggle::<S>),
    )
    .route("/bookmarks/promote", post(bookmarks::promote::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
