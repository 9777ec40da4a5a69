use axum::{extract::State, response::Response};

use crate::dtos::requests::CreateOrderRequest;
use crate::dtos::responses::OrderCreatedResponse;
use crate::services::order_service::{self, NewOrder};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok};
use crate::utils::validation::{ValidatedJson, VisitorId};

pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<Response, AppError> {
    let order = NewOrder::try_from(payload)?;
    let order_id = order_service::place_order(&state.pool, &order).await?;

    Ok(created(OrderCreatedResponse {
        message: "Order created successfully!",
        order_id,
    }))
}

pub async fn visitor_orders(
    State(state): State<AppState>,
    VisitorId(visitor_id): VisitorId,
) -> Result<Response, AppError> {
    let orders = order_service::order_history(&state.pool, visitor_id).await?;
    Ok(ok(orders))
}
