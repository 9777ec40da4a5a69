use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::error::AppError;

/// JSON body that has been deserialized and passed `Validate` checks.
///
/// Both malformed payloads and failed checks are rejected with
/// `AppError::ValidationError`, so clients always get the JSON error body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::ValidationError(first_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Visitor id taken from the `/visitor/:visitor_id/...` path segment.
///
/// A segment that is not an integer cannot name a visitor, so it is
/// reported as `AppError::NotFound` rather than a plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct VisitorId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for VisitorId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(visitor_id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Visitor not found".to_string()))?;
        Ok(VisitorId(visitor_id))
    }
}

/// Missing-field errors win over format errors; ties break on field name.
fn first_message(errors: &ValidationErrors) -> String {
    let mut found: Vec<_> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field.clone(), e)))
        .collect();
    found.sort_by_key(|(field, e)| (!is_missing(e), field.clone()));

    match found.first() {
        Some((_, ValidationError { message: Some(message), .. })) => message.to_string(),
        Some((field, _)) => format!("Invalid value for '{}'", field),
        None => "Invalid request".to_string(),
    }
}

fn is_missing(error: &ValidationError) -> bool {
    matches!(error.code.as_ref(), "required" | "length")
}
