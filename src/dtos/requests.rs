use serde::Deserialize;
use validator::Validate;

use crate::services::order_service::NewOrder;
use crate::utils::error::AppError;

const MISSING_ORDER_DATA: &str = "Missing required order data";

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Please fill in all required fields (First Name, Last Name, Email, Password)"
    ))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Please fill in all required fields (First Name, Last Name, Email, Password)"
    ))]
    pub last_name: String,
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            message = "Please fill in all required fields (First Name, Last Name, Email, Password)"
        ),
        email(message = "Please provide a valid email address")
    )]
    pub email: String,
    pub phone_number: Option<String>,
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Please fill in all required fields (First Name, Last Name, Email, Password)"
    ))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter both email and password"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter both email and password"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(
        required(message = "Missing required order data"),
        range(min = 1, message = "Missing required order data")
    )]
    pub visitor_id: Option<i64>,
    #[validate(
        required(message = "Missing required order data"),
        range(min = 1, message = "Missing required order data")
    )]
    pub event_id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required order data"))]
    pub visit_date: String,
    #[serde(default)]
    pub adult_tickets: u32,
    #[serde(default)]
    pub child_tickets: u32,
    #[serde(default)]
    pub senior_tickets: u32,
    #[validate(
        required(message = "Missing required order data"),
        range(min = 0.0, message = "Total price must not be negative")
    )]
    pub total_price: Option<f64>,
}

impl TryFrom<CreateOrderRequest> for NewOrder {
    type Error = AppError;

    fn try_from(req: CreateOrderRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::ValidationError(MISSING_ORDER_DATA.to_string());
        if req.visit_date.is_empty() {
            return Err(missing());
        }

        Ok(NewOrder {
            visitor_id: req.visitor_id.filter(|id| *id > 0).ok_or_else(missing)?,
            event_id: req.event_id.filter(|id| *id > 0).ok_or_else(missing)?,
            visit_date: req.visit_date,
            adult_tickets: req.adult_tickets,
            child_tickets: req.child_tickets,
            senior_tickets: req.senior_tickets,
            total_price: req.total_price.ok_or_else(missing)?,
        })
    }
}
