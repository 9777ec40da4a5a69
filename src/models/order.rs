use serde::Serialize;
use sqlx::FromRow;

use crate::models::ticket::TicketView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: i64,
    pub visitor_id: i64,
    pub total_amount: f64,
    pub order_date: String,
    pub order_status: String,
}

/// An order as listed in a visitor's history, with its tickets attached.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub order_id: i64,
    pub total_amount: f64,
    pub order_date: String,
    pub order_status: String,
    pub e_tickets: Vec<TicketView>,
}

impl OrderSummary {
    pub fn new(order: Order, e_tickets: Vec<TicketView>) -> Self {
        Self {
            order_id: order.id,
            total_amount: order.total_amount,
            order_date: order.order_date,
            order_status: order.order_status,
            e_tickets,
        }
    }
}
