//! Per-departure stop enrichment.
//!
//! Every departure on a board links to its own timetable. We fetch all of
//! them concurrently, tag each stop list for the traveller's station pair,
//! and hand the results back in board order no matter which fetch finishes
//! first.

use futures::future::{join_all, try_join_all};
use tracing::{debug, warn};

use crate::domain::{Crs, Departure, Journey, StopList};
use crate::error::ReportError;
use crate::transport::{TrainDataSource, TransportError, one_line};

/// What to do when one departure's timetable can't be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopFailurePolicy {
    /// Report the departure with its stops marked unavailable.
    #[default]
    Degrade,
    /// Fail the whole report on the first timetable error.
    Abort,
}

/// Stops for one departure, or why they're missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stops {
    Tagged(StopList),
    Unavailable { reason: String },
}

/// A departure together with its tagged stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDeparture {
    pub departure: Departure,
    pub stops: Stops,
}

/// Fetch one departure's timetable and tag it for `origin` → `destination`.
///
/// A departure without a timetable link fails without a request.
pub async fn enrich<S: TrainDataSource>(
    source: &S,
    departure: &Departure,
    origin: &Crs,
    destination: &Crs,
) -> Result<StopList, TransportError> {
    if departure.timetable_url.is_empty() {
        return Err(TransportError::NoTimetableLink);
    }

    let stops = source.fetch_timetable(&departure.timetable_url).await?;
    let tagged = StopList::tag(stops, origin, destination);

    debug!(
        train_uid = %departure.train_uid,
        stops = tagged.len(),
        on_route = tagged.on_route_count(),
        "tagged stops"
    );

    Ok(tagged)
}

/// Enrich every departure of `journey`, preserving board order.
///
/// All timetable fetches are started together and the results come back
/// in departure order. Under [`StopFailurePolicy::Abort`] the first fetch
/// to fail ends the run and the fetches still in flight are dropped. Under
/// `Degrade` a failure becomes [`Stops::Unavailable`] for that departure
/// only.
pub async fn enrich_all<S: TrainDataSource>(
    source: &S,
    journey: &Journey,
    policy: StopFailurePolicy,
) -> Result<Vec<EnrichedDeparture>, ReportError> {
    match policy {
        StopFailurePolicy::Abort => {
            let fetches = journey.departures.iter().map(|departure| async move {
                let list = enrich(source, departure, &journey.origin, &journey.destination)
                    .await
                    .map_err(|err| ReportError::Timetable {
                        train_uid: departure.train_uid.clone(),
                        source: err,
                    })?;

                Ok::<_, ReportError>(EnrichedDeparture {
                    departure: departure.clone(),
                    stops: Stops::Tagged(list),
                })
            });

            try_join_all(fetches).await
        }
        StopFailurePolicy::Degrade => {
            let fetches = journey
                .departures
                .iter()
                .map(|departure| enrich(source, departure, &journey.origin, &journey.destination));

            let results = join_all(fetches).await;

            Ok(journey
                .departures
                .iter()
                .zip(results)
                .map(|(departure, result)| EnrichedDeparture {
                    departure: departure.clone(),
                    stops: match result {
                        Ok(list) => Stops::Tagged(list),
                        Err(err) => {
                            warn!(
                                train_uid = %departure.train_uid,
                                error = %err,
                                "timetable unavailable, reporting departure without stops"
                            );
                            Stops::Unavailable {
                                reason: one_line(&err.to_string()),
                            }
                        }
                    },
                })
                .collect())
        }
    }
}
