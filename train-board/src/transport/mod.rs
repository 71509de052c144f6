//! TransportAPI live departures client.
//!
//! This module provides an HTTP client for the TransportAPI UK train
//! endpoints:
//! - `/station/{crs}/live.json` returns the live departure board for a
//!   station, filtered to services calling at a destination
//! - each departure links to its own service timetable, which lists
//!   every stop the train makes
//!
//! Times are "HH:MM" strings in UK local time and are passed through
//! untouched.

mod client;
mod convert;
mod error;
mod retry;
mod source;
mod types;

pub use client::{TransportClient, TransportConfig};
pub use convert::{BoardQuery, convert_live_board, convert_timetable};
pub use error::TransportError;
pub(crate) use error::one_line;
pub use retry::{RetryConfig, with_retry};
pub use source::TrainDataSource;
pub use types::{
    DepartureItem, Departures, LiveBoard, ServiceTimetable, ServiceTimetableResponse,
    TimetableStop,
};
