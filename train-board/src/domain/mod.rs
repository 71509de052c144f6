//! Domain types for the live departure report.
//!
//! Station codes are validated at construction time, so code that receives
//! a [`Crs`] can trust it. Board and timetable data are request-scoped
//! values built from one provider response.

mod journey;
mod station;
mod stop;

pub use journey::{Departure, Journey};
pub use station::{Crs, InvalidCrs};
pub use stop::{Stop, StopList};
