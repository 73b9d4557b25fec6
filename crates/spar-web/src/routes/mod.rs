//! Route handlers.

pub mod health;
pub mod risk;
pub mod schedule;
