use sqlx::{SqliteConnection, SqlitePool};

use crate::models::event::{Event, NewEvent};

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT id, title, description, start_date, end_date FROM events ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT id, title, description, start_date, end_date FROM events WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(conn)
        .await
}

pub async fn insert(conn: &mut SqliteConnection, event: &NewEvent<'_>) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO events (title, description, start_date, end_date) VALUES (?, ?, ?, ?)",
    )
    .bind(event.title)
    .bind(event.description)
    .bind(event.start_date)
    .bind(event.end_date)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}
