use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub visitor_id: i64,
    pub event_id: Option<i64>,
    pub message: String,
    pub create_date: String,
}
