//! Handler for the root path.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// Root path handler.
///
/// Returns the application name resolved at startup. The request carries no
/// inputs that affect the response, so the handler is infallible.
#[instrument(name = "root::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    state.config.app_name.clone()
}
