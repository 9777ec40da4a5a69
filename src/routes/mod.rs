use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::Response,
    routing::{get, post},
    Router,
};
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{event, health_check, index, not_found, order, visitor};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/register", post(visitor::register))
        .route("/login", post(visitor::login))
        .route("/events", get(event::list_events))
        .route("/order", post(order::create_order))
        .route("/visitor/:visitor_id/orders", get(order::visitor_orders))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|_request: &Request<Body>, _span: &Span| {
                    info!("started processing request");
                })
                .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|failure: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {}", failure);
                }),
        )
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
