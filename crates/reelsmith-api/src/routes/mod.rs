//! Route modules.

pub mod agent;
pub mod health;
