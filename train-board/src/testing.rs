//! In-memory data source and fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{Crs, Departure, Journey, Stop};
use crate::transport::{BoardQuery, TrainDataSource, TransportError};

/// Data source serving canned boards and timetables.
///
/// Unknown timetable URLs answer with a 404 API error. Each timetable can
/// be given a delay so tests control the order fetches complete in.
#[derive(Default)]
pub struct FakeSource {
    journey: Option<Journey>,
    timetables: HashMap<String, (Vec<Stop>, Duration)>,
    failures: HashMap<String, (u16, String)>,
    completed: Mutex<Vec<String>>,
    board_requests: Mutex<usize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journey(mut self, journey: Journey) -> Self {
        self.journey = Some(journey);
        self
    }

    pub fn with_timetable(self, url: &str, stops: Vec<Stop>) -> Self {
        self.with_delayed_timetable(url, stops, Duration::ZERO)
    }

    pub fn with_delayed_timetable(mut self, url: &str, stops: Vec<Stop>, delay: Duration) -> Self {
        self.timetables.insert(url.to_string(), (stops, delay));
        self
    }

    /// Answer `url` with an API error carrying `body` verbatim.
    pub fn with_failing_timetable(mut self, url: &str, status: u16, body: &str) -> Self {
        self.failures
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// Timetable URLs in the order their fetches finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn board_requests(&self) -> usize {
        *self.board_requests.lock().unwrap()
    }
}

impl TrainDataSource for FakeSource {
    async fn fetch_journey(&self, query: &BoardQuery) -> Result<Journey, TransportError> {
        *self.board_requests.lock().unwrap() += 1;

        let mut journey = self.journey.clone().ok_or(TransportError::Api {
            status: 404,
            message: "no board".into(),
        })?;
        journey.origin = query.origin;
        journey.destination = query.destination;
        journey.destination_name = query.destination_name.clone();
        Ok(journey)
    }

    async fn fetch_timetable(&self, url: &str) -> Result<Vec<Stop>, TransportError> {
        if let Some((status, body)) = self.failures.get(url) {
            return Err(TransportError::Api {
                status: *status,
                message: body.clone(),
            });
        }

        let Some((stops, delay)) = self.timetables.get(url) else {
            return Err(TransportError::Api {
                status: 404,
                message: format!("no timetable at {url}"),
            });
        };

        if !delay.is_zero() {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(url.to_string());
        Ok(stops.clone())
    }
}

pub fn crs(s: &str) -> Crs {
    Crs::parse(s).unwrap()
}

/// A departure identified by `train_uid` with its timetable at `url`.
pub fn departure(train_uid: &str, url: &str) -> Departure {
    Departure {
        mode: "train".into(),
        train_uid: train_uid.into(),
        operator: "GW".into(),
        operator_name: "Great Western Railway".into(),
        aimed_departure_time: "10:00".into(),
        expected_departure_time: "10:02".into(),
        expected_arrival_time: "10:02".into(),
        status: "LATE".into(),
        origin_name: "London Paddington".into(),
        destination_name: "Oxford".into(),
        timetable_url: url.into(),
        ..Default::default()
    }
}

/// A Paddington → Reading journey holding `departures`.
pub fn journey(departures: Vec<Departure>) -> Journey {
    Journey {
        date: "2019-07-15".into(),
        time_of_day: "09:55".into(),
        request_time: "2019-07-15T09:55:01+01:00".into(),
        origin: crs("PAD"),
        origin_name: "London Paddington".into(),
        destination: crs("RDG"),
        destination_name: "Reading".into(),
        departures,
    }
}
