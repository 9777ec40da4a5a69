pub mod event;
pub mod notification;
pub mod order;
pub mod payment;
pub mod ticket;
pub mod visitor;
