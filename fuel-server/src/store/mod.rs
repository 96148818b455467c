//! Station storage: the in-memory collection, its JSON data file, and the
//! locked handle that ties the two together.

mod error;
mod persist;
mod records;
mod seed;
mod shared;

pub use error::{LoadError, StoreError};
pub use persist::DataFile;
pub use records::Records;
pub use seed::seed_stations;
pub use shared::StationStore;
