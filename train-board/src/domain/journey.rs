//! Departure board aggregate.

use super::Crs;

/// A single departure from the origin station's live board.
///
/// Every text field is optional on the wire; absent values are stored as
/// empty strings so formatting never has to special-case `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Departure {
    /// Transport mode, normally "train".
    pub mode: String,
    /// Provider service identifier.
    pub service: String,
    /// Train identifier (schedule UID, e.g. "C23294").
    pub train_uid: String,
    /// Platform at the origin station.
    pub platform: String,
    /// ATOC operator code.
    pub operator: String,
    pub operator_name: String,
    pub aimed_departure_time: String,
    pub aimed_arrival_time: String,
    pub expected_departure_time: String,
    pub expected_arrival_time: String,
    /// Running status, e.g. "ON TIME" or "LATE".
    pub status: String,
    /// Where this train started its run.
    pub origin_name: String,
    /// Where this train terminates.
    pub destination_name: String,
    /// URL of the service's full timetable.
    pub timetable_url: String,
}

impl Departure {
    /// Departure time to show: expected if known, otherwise the booked time.
    pub fn departure_time(&self) -> &str {
        if self.expected_departure_time.is_empty() {
            &self.aimed_departure_time
        } else {
            &self.expected_departure_time
        }
    }
}

/// Live departures from an origin calling at a destination.
///
/// Request-scoped: built from one board response and discarded once the
/// report has been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub date: String,
    pub time_of_day: String,
    pub request_time: String,
    pub origin: Crs,
    pub origin_name: String,
    /// Filled in from the caller's validated input; the board omits it.
    pub destination: Crs,
    /// Filled in from the caller's validated input; the board omits it.
    pub destination_name: String,
    /// Departures in the order the provider returned them.
    pub departures: Vec<Departure>,
}
