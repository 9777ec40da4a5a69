pub mod order_service;
pub mod password;
