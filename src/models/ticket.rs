use serde::Serialize;
use sqlx::FromRow;

pub const UNKNOWN_EVENT_TITLE: &str = "Unknown Event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketType {
    Adult,
    Child,
    Senior,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "adult",
            TicketType::Child => "child",
            TicketType::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Valid,
    Used,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Valid => "Valid",
            TicketStatus::Used => "Used",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ETicket {
    pub id: i64,
    pub qr_code: String,
    pub visit_date: String,
    pub status: String,
    pub event_id: i64,
    pub order_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewETicket {
    pub qr_code: String,
    pub visit_date: String,
    pub event_id: i64,
    pub order_id: i64,
}

/// A ticket joined with the title of its event, as shown in order history.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketView {
    pub ticket_id: i64,
    #[serde(skip)]
    pub order_id: i64,
    pub qr_code: String,
    pub visit_date: String,
    pub status: String,
    pub event_title: String,
}

/// `QR_<order>_<event>_<type>_<sequence>`; `sequence` is the store-wide
/// ticket count at the time of insertion, plus one.
pub fn qr_code(order_id: i64, event_id: i64, ticket_type: TicketType, sequence: i64) -> String {
    format!(
        "QR_{}_{}_{}_{}",
        order_id,
        event_id,
        ticket_type.as_str(),
        sequence
    )
}
