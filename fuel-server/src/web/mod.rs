//! Web layer for the fuel station service.
//!
//! JSON API under `/api`, the map page at `/`, and static assets.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
