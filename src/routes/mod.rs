//! API Routes

pub mod health;
pub mod platform;
pub mod tickets;
