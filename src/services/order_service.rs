use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::models::order::{Order, OrderSummary};
use crate::models::ticket::{qr_code, NewETicket, TicketType, TicketView};
use crate::repositories::{event as event_repo, order as order_repo, visitor as visitor_repo};
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub visitor_id: i64,
    pub event_id: i64,
    pub visit_date: String,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub senior_tickets: u32,
    pub total_price: f64,
}

impl NewOrder {
    /// One entry per ticket to issue: adults, then children, then seniors.
    pub fn ticket_units(&self) -> impl Iterator<Item = TicketType> {
        std::iter::repeat(TicketType::Adult)
            .take(self.adult_tickets as usize)
            .chain(std::iter::repeat(TicketType::Child).take(self.child_tickets as usize))
            .chain(std::iter::repeat(TicketType::Senior).take(self.senior_tickets as usize))
    }

    pub fn ticket_count(&self) -> u64 {
        u64::from(self.adult_tickets) + u64::from(self.child_tickets) + u64::from(self.senior_tickets)
    }
}

/// Persists a pending order and one e-ticket per requested unit.
///
/// The order and its tickets commit together; any failure leaves neither.
pub async fn place_order(pool: &SqlitePool, order: &NewOrder) -> Result<i64, AppError> {
    let visitor_found = visitor_repo::exists(pool, order.visitor_id).await?;
    let event = event_repo::find_by_id(pool, order.event_id).await?;
    let event = match event {
        Some(event) if visitor_found => event,
        _ => return Err(AppError::NotFound("Visitor or Event not found".to_string())),
    };

    let mut tx = pool.begin().await?;

    let order_id =
        order_repo::insert_order(&mut tx, order.visitor_id, order.total_price, &order.visit_date)
            .await?;

    // Read after the order insert so the write lock is already held.
    let mut sequence = order_repo::count_tickets(&mut tx).await?;
    for ticket_type in order.ticket_units() {
        sequence += 1;
        let ticket = NewETicket {
            qr_code: qr_code(order_id, event.id, ticket_type, sequence),
            visit_date: order.visit_date.clone(),
            event_id: event.id,
            order_id,
        };
        let ticket_id = order_repo::insert_ticket(&mut tx, &ticket).await?;
        debug!(order_id, ticket_id, qr_code = %ticket.qr_code, "e-ticket issued");
    }

    tx.commit().await?;

    info!(
        order_id,
        visitor_id = order.visitor_id,
        event_id = event.id,
        tickets = order.ticket_count(),
        "order created"
    );
    Ok(order_id)
}

/// All orders of a visitor, oldest first, each with its tickets.
pub async fn order_history(pool: &SqlitePool, visitor_id: i64) -> Result<Vec<OrderSummary>, AppError> {
    if !visitor_repo::exists(pool, visitor_id).await? {
        return Err(AppError::NotFound("Visitor not found".to_string()));
    }

    let orders = order_repo::orders_for_visitor(pool, visitor_id).await?;
    let tickets = order_repo::tickets_for_visitor(pool, visitor_id).await?;

    Ok(group_tickets(orders, tickets))
}

fn group_tickets(orders: Vec<Order>, tickets: Vec<TicketView>) -> Vec<OrderSummary> {
    let mut by_order: HashMap<i64, Vec<TicketView>> = HashMap::new();
    for ticket in tickets {
        by_order.entry(ticket.order_id).or_default().push(ticket);
    }

    orders
        .into_iter()
        .map(|order| {
            let tickets = by_order.remove(&order.id).unwrap_or_default();
            OrderSummary::new(order, tickets)
        })
        .collect()
}
