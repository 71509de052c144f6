//! Station code → name lookup.
//!
//! Loaded from the National Rail station code CSV (`Station Name`,
//! `CRS Code` columns) and used to validate the station pair before any
//! request goes out.

mod directory;
mod error;

pub use directory::StationDirectory;
pub use error::StationError;
