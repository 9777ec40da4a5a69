use axum::response::{Html, Response};

use crate::dtos::responses::HealthPayload;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub mod event;
pub mod order;
pub mod visitor;

const INDEX_PAGE: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "museum-ticketing",
    };

    ok(payload)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
