//! Explicit query functions, one per access pattern.
//!
//! Functions taking `&SqlitePool` run standalone; functions taking
//! `&mut SqliteConnection` can also run inside a transaction.

pub mod event;
pub mod order;
pub mod visitor;
