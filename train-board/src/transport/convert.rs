//! Conversion from TransportAPI DTOs to domain types.

use crate::domain::{Crs, Departure, Journey, Stop};

use super::types::{DepartureItem, LiveBoard, ServiceTimetableResponse, TimetableStop};

/// Station pair and resolved names a board was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardQuery {
    pub origin: Crs,
    pub origin_name: String,
    pub destination: Crs,
    pub destination_name: String,
}

/// Convert a live board into a [`Journey`].
///
/// The board never names the destination, so it comes from `query`. The
/// origin name prefers the provider's spelling and falls back to the
/// directory name when the board leaves it out.
pub fn convert_live_board(board: LiveBoard, query: &BoardQuery) -> Journey {
    let departures = board
        .departures
        .and_then(|d| d.all)
        .unwrap_or_default()
        .into_iter()
        .map(convert_departure)
        .collect();

    let origin_name = match board.station_name {
        Some(name) if !name.is_empty() => name,
        _ => query.origin_name.clone(),
    };

    Journey {
        date: board.date.unwrap_or_default(),
        time_of_day: board.time_of_day.unwrap_or_default(),
        request_time: board.request_time.unwrap_or_default(),
        origin: query.origin,
        origin_name,
        destination: query.destination,
        destination_name: query.destination_name.clone(),
        departures,
    }
}

fn convert_departure(item: DepartureItem) -> Departure {
    Departure {
        mode: item.mode.unwrap_or_default(),
        service: item.service.unwrap_or_default(),
        train_uid: item.train_uid.unwrap_or_default(),
        platform: item.platform.unwrap_or_default(),
        operator: item.operator.unwrap_or_default(),
        operator_name: item.operator_name.unwrap_or_default(),
        aimed_departure_time: item.aimed_departure_time.unwrap_or_default(),
        aimed_arrival_time: item.aimed_arrival_time.unwrap_or_default(),
        expected_departure_time: item.expected_departure_time.unwrap_or_default(),
        expected_arrival_time: item.expected_arrival_time.unwrap_or_default(),
        status: item.status.unwrap_or_default(),
        origin_name: item.origin_name.unwrap_or_default(),
        destination_name: item.destination_name.unwrap_or_default(),
        timetable_url: item
            .service_timetable
            .and_then(|t| t.id)
            .unwrap_or_default(),
    }
}

/// Convert a timetable response into untagged stops, keeping source order.
pub fn convert_timetable(timetable: ServiceTimetableResponse) -> Vec<Stop> {
    timetable.stops.into_iter().map(convert_stop).collect()
}

fn convert_stop(stop: TimetableStop) -> Stop {
    Stop {
        station_code: stop.station_code.unwrap_or_default(),
        station_name: stop.station_name.unwrap_or_default(),
        expected_arrival_time: stop.expected_arrival_time.unwrap_or_default(),
        platform: stop.platform.unwrap_or_default(),
        on_route: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> BoardQuery {
        BoardQuery {
            origin: Crs::parse("RDG").unwrap(),
            origin_name: "Reading (directory)".into(),
            destination: Crs::parse("PAD").unwrap(),
            destination_name: "London Paddington".into(),
        }
    }

    #[test]
    fn fills_destination_from_query() {
        let board: LiveBoard = serde_json::from_str(
            r#"{
                "date": "2019-07-15",
                "time_of_day": "20:16",
                "request_time": "2019-07-15T20:16:04+01:00",
                "station_name": "Reading",
                "station_code": "RDG",
                "departures": {"all": []}
            }"#,
        )
        .unwrap();

        let journey = convert_live_board(board, &query());

        assert_eq!(journey.origin.as_str(), "RDG");
        assert_eq!(journey.origin_name, "Reading");
        assert_eq!(journey.destination.as_str(), "PAD");
        assert_eq!(journey.destination_name, "London Paddington");
        assert_eq!(journey.time_of_day, "20:16");
        assert_eq!(journey.request_time, "2019-07-15T20:16:04+01:00");
        assert!(journey.departures.is_empty());
    }

    #[test]
    fn missing_station_name_uses_directory_name() {
        let board: LiveBoard = serde_json::from_str(r#"{"station_name": null}"#).unwrap();
        let journey = convert_live_board(board, &query());
        assert_eq!(journey.origin_name, "Reading (directory)");
        assert!(journey.departures.is_empty());
        assert_eq!(journey.date, "");
    }

    #[test]
    fn departures_keep_order_and_default_missing_fields() {
        let board: LiveBoard = serde_json::from_str(
            r#"{
                "departures": {"all": [
                    {"train_uid": "A1", "expected_departure_time": null, "aimed_departure_time": "10:00"},
                    {"train_uid": "B2", "service_timetable": {"id": "http://example/tt/B2"}},
                    {"train_uid": "C3", "status": "LATE"}
                ]}
            }"#,
        )
        .unwrap();

        let journey = convert_live_board(board, &query());
        let uids: Vec<_> = journey.departures.iter().map(|d| d.train_uid.as_str()).collect();
        assert_eq!(uids, ["A1", "B2", "C3"]);

        assert_eq!(journey.departures[0].expected_departure_time, "");
        assert_eq!(journey.departures[0].departure_time(), "10:00");
        assert_eq!(journey.departures[1].timetable_url, "http://example/tt/B2");
        assert_eq!(journey.departures[0].timetable_url, "");
        assert_eq!(journey.departures[2].status, "LATE");
    }

    #[test]
    fn timetable_stops_are_untagged() {
        let tt: ServiceTimetableResponse = serde_json::from_str(
            r#"{"stops": [
                {"station_code": "PAD", "station_name": "London Paddington", "platform": "14"},
                {"station_code": "RDG", "station_name": "Reading", "expected_arrival_time": "10:25"}
            ]}"#,
        )
        .unwrap();

        let stops = convert_timetable(tt);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].platform, "14");
        assert_eq!(stops[1].expected_arrival_time, "10:25");
        assert_eq!(stops[1].platform, "");
        assert!(stops.iter().all(|s| !s.on_route));
    }
}
