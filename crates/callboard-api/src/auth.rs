//! Per-request identity resolution.
//!
//! Two principals exist at this boundary: the single operator, who presents
//! HTTP Basic credentials checked against an argon2 PHC hash from config,
//! and ordinary members, whose user id arrives in the `X-User-Id` header
//! set by the fronting gateway (the gateway owns authentication mechanics).

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::http::HeaderMap;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use callboard_core::identity::{CurrentUser, Role};
use uuid::Uuid;

/// Operator credentials accepted by this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// The single operator principal. There is exactly one operator account, so
/// its id is fixed.
pub const OPERATOR_ID: Uuid = Uuid::nil();

/// Resolve the caller's identity from request headers, if any.
///
/// Basic credentials that fail verification resolve to `None` rather than a
/// member identity — a wrong operator password must not fall through to a
/// lesser role.
pub fn identify(headers: &HeaderMap, config: &AuthConfig) -> Option<CurrentUser> {
  if let Some(value) = headers.get(axum::http::header::AUTHORIZATION) {
    let verified = value
      .to_str()
      .ok()
      .and_then(|v| v.strip_prefix("Basic "))
      .and_then(|encoded| verify_basic(encoded, config));
    return verified;
  }

  headers
    .get("x-user-id")
    .and_then(|v| v.to_str().ok())
    .and_then(|s| Uuid::parse_str(s).ok())
    .map(|user_id| CurrentUser { user_id, role: Role::Member })
}

/// Resolve the caller's identity or fail with an authentication error.
pub fn require_identity(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<CurrentUser, callboard_moderation::Error> {
  identify(headers, config)
    .ok_or(callboard_moderation::Error::Auth("sign in required"))
}

fn verify_basic(encoded: &str, config: &AuthConfig) -> Option<CurrentUser> {
  let decoded = B64.decode(encoded).ok()?;
  let creds = std::str::from_utf8(&decoded).ok()?;
  let (username, password) = creds.split_once(':')?;

  if username != config.username {
    return None;
  }

  let parsed_hash = PasswordHash::new(&config.password_hash).ok()?;
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .ok()?;

  Some(CurrentUser { user_id: OPERATOR_ID, role: Role::Operator })
}
