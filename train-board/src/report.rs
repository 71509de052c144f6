//! Report orchestration: validate, fetch, enrich, format.

use tracing::info;

use crate::domain::Journey;
use crate::enrich::{EnrichedDeparture, StopFailurePolicy, enrich_all};
use crate::error::ReportError;
use crate::format::render_report;
use crate::stations::StationDirectory;
use crate::transport::{BoardQuery, TrainDataSource};

/// A journey with every departure's stops resolved, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub journey: Journey,
    pub departures: Vec<EnrichedDeparture>,
}

impl Report {
    pub fn render(&self) -> String {
        render_report(self)
    }
}

/// Builds departure reports for station pairs.
///
/// Holds the station directory used for validation and the data source
/// used for fetching. Each call is independent; nothing is kept between
/// reports.
#[derive(Debug)]
pub struct TrainReporter<S> {
    directory: StationDirectory,
    source: S,
    policy: StopFailurePolicy,
}

impl<S: TrainDataSource> TrainReporter<S> {
    pub fn new(directory: StationDirectory, source: S) -> Self {
        Self {
            directory,
            source,
            policy: StopFailurePolicy::default(),
        }
    }

    /// Set what happens when a single timetable fetch fails.
    pub fn with_policy(mut self, policy: StopFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// Check both codes and resolve their names. Never touches the network.
    pub fn validate(&self, origin: &str, destination: &str) -> Result<BoardQuery, ReportError> {
        let (origin, origin_name) = self.directory.resolve(origin)?;
        let (destination, destination_name) = self.directory.resolve(destination)?;

        Ok(BoardQuery {
            origin,
            origin_name,
            destination,
            destination_name,
        })
    }

    /// Fetch and enrich live departures from `origin` calling at `destination`.
    pub async fn report(&self, origin: &str, destination: &str) -> Result<Report, ReportError> {
        let query = self.validate(origin, destination)?;

        let journey = self
            .source
            .fetch_journey(&query)
            .await
            .map_err(ReportError::Board)?;

        let departures = enrich_all(&self.source, &journey, self.policy).await?;

        info!(
            origin = %journey.origin,
            destination = %journey.destination,
            departures = departures.len(),
            "built departure report"
        );

        Ok(Report {
            journey,
            departures,
        })
    }

    /// Build a report and render it as text.
    pub async fn render(&self, origin: &str, destination: &str) -> Result<String, ReportError> {
        Ok(self.report(origin, destination).await?.render())
    }
}
