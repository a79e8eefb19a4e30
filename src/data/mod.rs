//! Data module - record table, CSV loading, and filtering

mod filter;
mod loader;
mod record;

pub use filter::FilterState;
pub use loader::{read_records, DataLoader, LoaderError};
pub use record::{VehicleRecord, BEV_TYPE, PHEV_TYPE};
