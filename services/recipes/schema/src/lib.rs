//! sea-orm entities for the recipes service tables.

pub mod recipes;
pub mod users;
