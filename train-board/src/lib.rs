//! Live train departure reports.
//!
//! Fetches the live departure board for a station pair from TransportAPI,
//! looks up each departure's timetable concurrently, marks which stops lie
//! between the two stations, and renders the result as a text report.

pub mod credentials;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod format;
pub mod report;
pub mod stations;
pub mod transport;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;
