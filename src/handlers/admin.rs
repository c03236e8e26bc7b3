//! Reset handler: restore the seed data.

use crate::error::AppError;
use crate::response::message_ok;
use crate::service::MutationService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /api/reset
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = MutationService::reset(&state)?;
    Ok(message_ok(MutationService::reset_message(count)))
}
