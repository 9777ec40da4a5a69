use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A museum exhibition. Dates are kept as the strings they were entered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Copy)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
}
