//! Completion/cost notification handling
//!
//! The aggregator fires these events without expecting a meaningful
//! synchronous response: acknowledge immediately, reconcile in a spawned
//! task with its own failure boundary. Processing errors are terminal but
//! silent (log only) - the sender never retries.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::state::AppState;
use crate::billing::CompletionNotice;

/// USSD completion/cost notification endpoint
///
/// POST /ussd/events (form-encoded)
#[utoipa::path(
    post,
    path = "/ussd/events",
    request_body(content = String, description = "Form fields: sessionId, status, durationInSeconds, cost", content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Always acknowledged; processing is asynchronous", content_type = "text/plain")
    ),
    tag = "USSD"
)]
pub async fn ussd_events(
    State(state): State<Arc<AppState>>,
    Form(notice): Form<CompletionNotice>,
) -> impl IntoResponse {
    tracing::info!(
        session_id = notice.session_id.as_deref().unwrap_or("<missing>"),
        status = notice.status.as_deref().unwrap_or("<missing>"),
        cost = notice.cost.as_deref().unwrap_or("<missing>"),
        "USSD event notification received"
    );

    let reconciler = state.reconciler.clone();
    tokio::spawn(async move {
        match reconciler.reconcile(&notice).await {
            Ok(outcome) => {
                tracing::debug!(?outcome, "Notification reconciliation finished");
            }
            Err(e) => {
                // Accepted risk: the one-shot notification is lost and the
                // session stays Pending.
                tracing::error!(error = %e, "Notification reconciliation failed");
            }
        }
    });

    (StatusCode::OK, "Event received.")
}
