pub mod account;
pub mod extract;
pub mod health;
pub mod recipe;

use serde::Serialize;

/// Body of endpoints that only confirm success.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
