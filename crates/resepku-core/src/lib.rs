//! Shared HTTP plumbing for Resepku services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
