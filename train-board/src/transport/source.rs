//! Abstraction over where boards and timetables come from.

use std::future::Future;

use crate::domain::{Journey, Stop};

use super::client::TransportClient;
use super::convert::BoardQuery;
use super::error::TransportError;

/// Trait for providing live boards and service timetables.
///
/// This abstraction lets the enrichment pipeline run against the HTTP
/// client in production and against canned data in tests.
pub trait TrainDataSource: Sync {
    /// Get live departures for a station pair.
    fn fetch_journey(
        &self,
        query: &BoardQuery,
    ) -> impl Future<Output = Result<Journey, TransportError>> + Send;

    /// Get the untagged stops of a service, in timetable order.
    fn fetch_timetable(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<Stop>, TransportError>> + Send;
}

impl TrainDataSource for TransportClient {
    async fn fetch_journey(&self, query: &BoardQuery) -> Result<Journey, TransportError> {
        TransportClient::fetch_journey(self, query).await
    }

    async fn fetch_timetable(&self, url: &str) -> Result<Vec<Stop>, TransportError> {
        TransportClient::fetch_timetable(self, url).await
    }
}
