//! The Callboard moderation pipeline.
//!
//! Members submit artists, songs, chant templates, and inquiries; the
//! operator reviews the pending queue and publishes or discards each one.
//! This crate owns the state-transition logic over any
//! [`callboard_core::store::ContentStore`] backend:
//!
//! - [`intake`] — validated creation of pending submissions, bulletin
//!   posts, reports, and author-published charts;
//! - [`queue`] — the operator-facing read side;
//! - [`decision`] — approve / reject / reply over pending submissions;
//! - [`bulletin`] — the in-place bulletin-post review;
//! - [`bookmark`] — the save / promote / unsave state machine;
//! - [`triage`] — resolve / ignore over content reports.
//!
//! The one correctness-critical ordering lives in [`decision`]: the publish
//! side effect always precedes retiring the submission row, so a store
//! failure can never silently lose a pending request.

pub mod bookmark;
pub mod bulletin;
pub mod decision;
pub mod error;
pub mod intake;
pub mod queue;
pub mod triage;

pub use error::{Error, Result};

use callboard_core::identity::CurrentUser;

/// All mutating operator surfaces share this gate.
pub(crate) fn require_operator(user: &CurrentUser) -> Result<()> {
  if user.is_operator() {
    Ok(())
  } else {
    Err(Error::Auth("operator role required"))
  }
}

#[cfg(test)]
mod tests;
