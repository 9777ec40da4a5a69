use axum::{extract::State, response::Response};
use tracing::{info, warn};

use crate::dtos::requests::{LoginRequest, RegisterRequest};
use crate::dtos::responses::LoginResponse;
use crate::models::visitor::NewVisitor;
use crate::repositories::visitor as visitor_repo;
use crate::services::password::{hash_password, verify_password};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok, MessageResponse};
use crate::utils::validation::ValidatedJson;

const EMAIL_TAKEN: &str = "Email already registered";
const BAD_CREDENTIALS: &str = "Invalid email or password";

pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<Response, AppError> {
    if visitor_repo::find_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadyExists(EMAIL_TAKEN.to_string()));
    }

    let visitor = NewVisitor {
        password_hash: hash_password(&payload.password)?,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone_number: payload.phone_number.filter(|p| !p.is_empty()),
    };

    // A concurrent registration can still win the UNIQUE index.
    let visitor_id = visitor_repo::insert(&state.pool, &visitor)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if duplicate {
                AppError::AlreadyExists(EMAIL_TAKEN.to_string())
            } else {
                AppError::DatabaseError(e)
            }
        })?;

    info!(visitor_id, "visitor registered");
    Ok(created(MessageResponse::new("Visitor registered successfully!")))
}

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    let Some(visitor) = visitor_repo::find_by_email(&state.pool, &payload.email).await? else {
        warn!("login attempt for unknown email");
        return Err(AppError::AuthError(BAD_CREDENTIALS.to_string()));
    };

    if !verify_password(&payload.password, &visitor.password_hash)? {
        warn!(visitor_id = visitor.id, "login attempt with wrong password");
        return Err(AppError::AuthError(BAD_CREDENTIALS.to_string()));
    }

    info!(visitor_id = visitor.id, "visitor logged in");
    Ok(ok(LoginResponse {
        message: "Login successful!",
        visitor: visitor.into(),
    }))
}
