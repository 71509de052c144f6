//! Plain-text rendering of a departure report.

use crate::domain::{Departure, Journey, StopList};
use crate::enrich::{EnrichedDeparture, Stops};
use crate::report::Report;

/// Character repeated to frame the header.
const BORDER: char = '=';

/// Separator between on-route station names.
const NAME_DELIMITER: &str = ", ";

/// Header line framed by a border of the same length above and below.
pub fn render_header(journey: &Journey) -> String {
    let header = format!(
        "==== Trains from {} ({}) to {} ({}) {} {} ====",
        journey.origin_name,
        journey.origin,
        journey.destination_name,
        journey.destination,
        journey.time_of_day,
        journey.date,
    );
    let border: String = std::iter::repeat_n(BORDER, header.chars().count()).collect();

    format!("{border}\n{header}\n{border}")
}

/// Two-line summary of one departure.
///
/// Platforms come from the stops matching the journey's origin and
/// destination and are left blank when the timetable doesn't list them.
pub fn render_departure(departure: &Departure, stops: &StopList, journey: &Journey) -> String {
    let source = stops.find(&journey.origin);
    let dest = stops.find(&journey.destination);

    let arrival = dest
        .map(|s| s.expected_arrival_time.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(departure.expected_arrival_time.as_str());

    format!(
        "{} {} -> {} {} => {}\n\
         \tTrain {} ({}) from {} arriving at {} on platform {} going to {} platform {}. {} stops:",
        journey.origin,
        departure.departure_time(),
        journey.destination,
        arrival,
        departure.status,
        departure.train_uid,
        departure.operator,
        departure.origin_name,
        journey.origin_name,
        source.map(|s| s.platform.as_str()).unwrap_or_default(),
        journey.destination_name,
        dest.map(|s| s.platform.as_str()).unwrap_or_default(),
        stops.on_route_count(),
    )
}

/// Names of the on-route stops in order, comma separated.
///
/// Empty when nothing is on route.
pub fn render_on_route_names(stops: &StopList) -> String {
    stops
        .on_route()
        .map(|s| s.station_name.as_str())
        .collect::<Vec<_>>()
        .join(NAME_DELIMITER)
}

fn render_enriched(enriched: &EnrichedDeparture, journey: &Journey) -> String {
    match &enriched.stops {
        Stops::Tagged(list) => format!(
            "{}\n\t{}",
            render_departure(&enriched.departure, list, journey),
            render_on_route_names(list),
        ),
        Stops::Unavailable { reason } => format!(
            "{}\n\tstops unavailable: {}",
            render_departure(&enriched.departure, &StopList::default(), journey),
            reason,
        ),
    }
}

/// Full report: header, then each departure in board order.
pub fn render_report(report: &Report) -> String {
    let mut out = render_header(&report.journey);
    out.push('\n');

    for enriched in &report.departures {
        out.push_str(&render_enriched(enriched, &report.journey));
        out.push('\n');
    }

    out
}
