use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

pub fn ok<T>(body: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(body)).into_response()
}

pub fn created<T>(body: T) -> Response
where
    T: Serialize,
{
    (StatusCode::CREATED, Json(body)).into_response()
}

pub fn error(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        error: message.into(),
        code: code.to_string(),
    };

    (status, Json(body)).into_response()
}
