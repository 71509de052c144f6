//! TransportAPI response DTOs.
//!
//! These types map directly to the live board and service timetable JSON.
//! TransportAPI sends explicit `null` for many fields and omits others
//! entirely, so nearly everything is an `Option` with `#[serde(default)]`.

use serde::Deserialize;

/// Response from `/station/{crs}/live.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveBoard {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub time_of_day: Option<String>,

    /// When the provider generated this board (ISO 8601 with offset).
    #[serde(default)]
    pub request_time: Option<String>,

    #[serde(default)]
    pub station_name: Option<String>,

    #[serde(default)]
    pub station_code: Option<String>,

    #[serde(default)]
    pub departures: Option<Departures>,

    /// Set instead of board data when the request was rejected.
    #[serde(default)]
    pub error: Option<String>,
}

/// The `departures` block. Only `all` is requested.
#[derive(Debug, Clone, Deserialize)]
pub struct Departures {
    #[serde(default)]
    pub all: Option<Vec<DepartureItem>>,
}

/// One departure on the live board.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureItem {
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub train_uid: Option<String>,

    #[serde(default)]
    pub platform: Option<String>,

    /// ATOC code, e.g. "GW".
    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub operator_name: Option<String>,

    #[serde(default)]
    pub aimed_departure_time: Option<String>,

    #[serde(default)]
    pub aimed_arrival_time: Option<String>,

    #[serde(default)]
    pub aimed_pass_time: Option<String>,

    #[serde(default)]
    pub origin_name: Option<String>,

    #[serde(default)]
    pub destination_name: Option<String>,

    /// Data source, e.g. "Network Rail".
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub service_timetable: Option<ServiceTimetable>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub expected_arrival_time: Option<String>,

    #[serde(default)]
    pub expected_departure_time: Option<String>,

    #[serde(default)]
    pub best_arrival_estimate_mins: Option<i64>,

    #[serde(default)]
    pub best_departure_estimate_mins: Option<i64>,
}

/// Link to a service's full timetable.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTimetable {
    /// Absolute URL, already carrying credentials and `live=true`.
    #[serde(default)]
    pub id: Option<String>,
}

/// Response from a service timetable URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTimetableResponse {
    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub train_uid: Option<String>,

    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub origin_name: Option<String>,

    #[serde(default)]
    pub destination_name: Option<String>,

    /// Required: a timetable without stops is not a timetable.
    pub stops: Vec<TimetableStop>,
}

/// A calling point within a service timetable.
#[derive(Debug, Clone, Deserialize)]
pub struct TimetableStop {
    #[serde(default)]
    pub station_code: Option<String>,

    #[serde(default)]
    pub tiploc_code: Option<String>,

    #[serde(default)]
    pub station_name: Option<String>,

    /// Stop type: "LO" (origin), "LI" (intermediate), "LT" (terminus).
    #[serde(default)]
    pub stop_type: Option<String>,

    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub aimed_arrival_time: Option<String>,

    #[serde(default)]
    pub aimed_departure_time: Option<String>,

    #[serde(default)]
    pub expected_arrival_time: Option<String>,

    #[serde(default)]
    pub expected_departure_time: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}
