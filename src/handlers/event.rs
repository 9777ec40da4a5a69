use axum::{extract::State, response::Response};

use crate::repositories::event as event_repo;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = event_repo::list_all(&state.pool).await?;
    Ok(ok(events))
}
