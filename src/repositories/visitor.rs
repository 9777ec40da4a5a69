use sqlx::SqlitePool;

use crate::models::visitor::{NewVisitor, Visitor};

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Visitor>, sqlx::Error> {
    sqlx::query_as::<_, Visitor>(
        "SELECT id, first_name, last_name, email, phone_number, password_hash FROM visitors WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM visitors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn insert(pool: &SqlitePool, visitor: &NewVisitor) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO visitors (first_name, last_name, email, phone_number, password_hash) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&visitor.first_name)
    .bind(&visitor.last_name)
    .bind(&visitor.email)
    .bind(&visitor.phone_number)
    .bind(&visitor.password_hash)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
