use sqlx::{SqliteConnection, SqlitePool};

use crate::models::order::{Order, OrderStatus};
use crate::models::ticket::{ETicket, NewETicket, TicketStatus, TicketView, UNKNOWN_EVENT_TITLE};

pub async fn insert_order(
    conn: &mut SqliteConnection,
    visitor_id: i64,
    total_amount: f64,
    order_date: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO orders (visitor_id, total_amount, order_date, order_status) VALUES (?, ?, ?, ?)",
    )
    .bind(visitor_id)
    .bind(total_amount)
    .bind(order_date)
    .bind(OrderStatus::Pending.as_str())
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn count_tickets(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM e_tickets")
        .fetch_one(conn)
        .await
}

pub async fn insert_ticket(conn: &mut SqliteConnection, ticket: &NewETicket) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO e_tickets (qr_code, visit_date, status, event_id, order_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&ticket.qr_code)
    .bind(&ticket.visit_date)
    .bind(TicketStatus::Valid.as_str())
    .bind(ticket.event_id)
    .bind(ticket.order_id)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn orders_for_visitor(pool: &SqlitePool, visitor_id: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, visitor_id, total_amount, order_date, order_status FROM orders WHERE visitor_id = ? ORDER BY id ASC",
    )
    .bind(visitor_id)
    .fetch_all(pool)
    .await
}

pub async fn tickets_for_order(pool: &SqlitePool, order_id: i64) -> Result<Vec<ETicket>, sqlx::Error> {
    sqlx::query_as::<_, ETicket>(
        "SELECT id, qr_code, visit_date, status, event_id, order_id FROM e_tickets WHERE order_id = ? ORDER BY id ASC",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
}

/// Every ticket across all of a visitor's orders, with its event title.
pub async fn tickets_for_visitor(pool: &SqlitePool, visitor_id: i64) -> Result<Vec<TicketView>, sqlx::Error> {
    sqlx::query_as::<_, TicketView>(
        r#"
        SELECT t.id AS ticket_id,
               t.order_id,
               t.qr_code,
               t.visit_date,
               t.status,
               COALESCE(e.title, ?) AS event_title
        FROM e_tickets t
        JOIN orders o ON o.id = t.order_id
        LEFT JOIN events e ON e.id = t.event_id
        WHERE o.visitor_id = ?
        ORDER BY t.id ASC
        "#,
    )
    .bind(UNKNOWN_EVENT_TITLE)
    .bind(visitor_id)
    .fetch_all(pool)
    .await
}
