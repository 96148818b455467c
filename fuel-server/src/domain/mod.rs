//! Core domain types for the fuel station service.
//!
//! A station is the only entity. Both request bodies and the persisted data
//! file are decoded through the same lenient field coercion in [`fields`].

mod error;
pub mod fields;
mod station;

pub use error::DomainError;
pub use station::{PriceUpdate, Station, StationId};
