use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Visitor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
}

/// Fields needed to insert a visitor; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewVisitor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
}

/// The part of a visitor that may be shown back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct VisitorProfile {
    pub visitor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Visitor> for VisitorProfile {
    fn from(visitor: Visitor) -> Self {
        Self {
            visitor_id: visitor.id,
            first_name: visitor.first_name,
            last_name: visitor.last_name,
            email: visitor.email,
        }
    }
}
