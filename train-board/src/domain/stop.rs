//! Calling points of a service and on-route tagging.

use super::Crs;

/// A station a service calls at, as listed in its timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stop {
    /// Raw station code from the timetable (not validated).
    pub station_code: String,
    pub station_name: String,
    pub expected_arrival_time: String,
    pub platform: String,
    /// Whether the stop lies between the traveller's origin and destination.
    ///
    /// Computed by [`StopList::tag`]; the provider never supplies it.
    pub on_route: bool,
}

impl Stop {
    /// Create an untagged stop.
    pub fn new(station_code: impl Into<String>, station_name: impl Into<String>) -> Self {
        Self {
            station_code: station_code.into(),
            station_name: station_name.into(),
            ..Default::default()
        }
    }
}

/// Stops of one service in timetable order, tagged for a station pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopList {
    stops: Vec<Stop>,
}

impl StopList {
    /// Tag `stops` for travel from `origin` to `destination`.
    ///
    /// One left-to-right pass with a single accumulator. The origin stop
    /// opens the run and the destination stop closes it; both endpoints are
    /// on route. If a code never appears, the accumulator keeps whatever value
    /// it had, so a missing origin leaves everything before the destination
    /// off route and a missing destination leaves everything after the origin
    /// on route.
    pub fn tag(mut stops: Vec<Stop>, origin: &Crs, destination: &Crs) -> Self {
        let mut in_route = false;

        for stop in &mut stops {
            if origin.matches(&stop.station_code) {
                stop.on_route = true;
                in_route = true;
            } else if destination.matches(&stop.station_code) {
                stop.on_route = true;
                in_route = false;
            } else {
                stop.on_route = in_route;
            }
        }

        Self { stops }
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop whose code is `code`.
    pub fn find(&self, code: &Crs) -> Option<&Stop> {
        self.stops.iter().find(|s| code.matches(&s.station_code))
    }

    /// Stops flagged on route, in timetable order.
    pub fn on_route(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|s| s.on_route)
    }

    pub fn on_route_count(&self) -> usize {
        self.on_route().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crs(s: &str) -> Crs {
        Crs::parse(s).unwrap()
    }

    fn stops(codes: &[&str]) -> Vec<Stop> {
        codes.iter().map(|c| Stop::new(*c, format!("{c} name"))).collect()
    }

    fn flags(list: &StopList) -> Vec<bool> {
        list.stops().iter().map(|s| s.on_route).collect()
    }

    #[test]
    fn run_bounded_by_origin_and_destination() {
        let list = StopList::tag(
            stops(&["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"]),
            &crs("CCC"),
            &crs("EEE"),
        );
        assert_eq!(flags(&list), [false, false, true, true, true, false]);
    }

    #[test]
    fn adjacent_origin_and_destination() {
        let list = StopList::tag(stops(&["CCC", "EEE"]), &crs("CCC"), &crs("EEE"));
        assert_eq!(flags(&list), [true, true]);
    }

    #[test]
    fn missing_origin_only_marks_destination() {
        let list = StopList::tag(stops(&["AAA", "EEE", "FFF"]), &crs("CCC"), &crs("EEE"));
        assert_eq!(flags(&list), [false, true, false]);
    }

    #[test]
    fn missing_destination_runs_to_end() {
        let list = StopList::tag(stops(&["AAA", "CCC", "DDD"]), &crs("CCC"), &crs("EEE"));
        assert_eq!(flags(&list), [false, true, true]);
    }

    #[test]
    fn empty_list() {
        let list = StopList::tag(Vec::new(), &crs("CCC"), &crs("EEE"));
        assert!(list.is_empty());
        assert_eq!(list.on_route_count(), 0);
    }

    #[test]
    fn preserves_order_and_fields() {
        let mut input = stops(&["AAA", "CCC", "EEE"]);
        input[1].platform = "4".into();
        input[2].expected_arrival_time = "11:02".into();

        let list = StopList::tag(input, &crs("CCC"), &crs("EEE"));

        let codes: Vec<_> = list.stops().iter().map(|s| s.station_code.as_str()).collect();
        assert_eq!(codes, ["AAA", "CCC", "EEE"]);
        assert_eq!(list.find(&crs("CCC")).unwrap().platform, "4");
        assert_eq!(list.find(&crs("EEE")).unwrap().expected_arrival_time, "11:02");
        assert!(list.find(&crs("ZZZ")).is_none());
    }

    #[test]
    fn on_route_iterates_in_order() {
        let list = StopList::tag(
            stops(&["AAA", "CCC", "DDD", "EEE", "FFF"]),
            &crs("CCC"),
            &crs("EEE"),
        );
        let names: Vec<_> = list.on_route().map(|s| s.station_name.as_str()).collect();
        assert_eq!(names, ["CCC name", "DDD name", "EEE name"]);
        assert_eq!(list.on_route_count(), 3);
    }
}
