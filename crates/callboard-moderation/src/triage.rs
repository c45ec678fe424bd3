//! Report triage: `pending` → `resolved` | `ignored`.
//!
//! A narrower state machine than the decision engine — both transitions are
//! simple in-place status updates. The reported target is never read or
//! written here; a report is purely advisory state for the operator.

use callboard_core::{
  identity::CurrentUser,
  report::{Report, ReportStatus},
  store::ContentStore,
};
use uuid::Uuid;

use crate::{require_operator, Error, Result};

/// Mark a report resolved.
pub async fn resolve<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
) -> Result<Report>
where
  S: ContentStore,
{
  triage(store, operator, id, ReportStatus::Resolved).await
}

/// Mark a report ignored.
pub async fn ignore<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
) -> Result<Report>
where
  S: ContentStore,
{
  triage(store, operator, id, ReportStatus::Ignored).await
}

async fn triage<S>(
  store: &S,
  operator: &CurrentUser,
  id: Uuid,
  status: ReportStatus,
) -> Result<Report>
where
  S: ContentStore,
{
  require_operator(operator)?;

  let report = store
    .get_report(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(id))?;

  // Re-triaging a terminal report is not modeled; a repeated decision
  // (operator double-click) is a benign no-op on the stored state.
  if report.status.is_terminal() {
    return Ok(report);
  }

  store
    .set_report_status(id, status)
    .await
    .map_err(Error::store)?;

  tracing::info!(%id, ?status, "report triaged");
  Ok(Report { status, ..report })
}
