use serde::Serialize;

use crate::models::visitor::VisitorProfile;

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: &'static str,
    pub order_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub visitor: VisitorProfile,
}

#[derive(Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub service: &'static str,
}
