//! Loop-closure check on the realized route.

use crate::constants::PROXIMITY_THRESHOLD_MILES;
use crate::models::{DistanceMiles, RealizedRoute};

/// True iff the realized route's first leg starts within the loop threshold
/// of where its last leg ends. A route with no legs has no endpoints and
/// fails the check.
pub fn start_end_within_threshold(route: &RealizedRoute) -> bool {
    let Some((start, end)) = route.endpoints() else {
        return false;
    };
    start.distance_to(&end) <= DistanceMiles::from_raw(PROXIMITY_THRESHOLD_MILES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DistanceMeters, RouteLeg};

    fn coord(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    fn route_between(start: Coordinates, end: Coordinates) -> RealizedRoute {
        RealizedRoute {
            overview_polyline: String::new(),
            summary: None,
            legs: vec![RouteLeg {
                start_location: start,
                end_location: end,
                distance: DistanceMeters::from_raw(0.0),
                steps: vec![],
            }],
        }
    }

    #[test]
    fn test_identical_endpoints_pass() {
        let p = coord(37.7749, -122.4194);
        assert!(start_end_within_threshold(&route_between(p, p)));
    }

    #[test]
    fn test_nearby_endpoints_pass() {
        // ~0.69 miles apart along the equator
        let route = route_between(coord(0.0, 0.0), coord(0.0, 0.01));
        assert!(start_end_within_threshold(&route));
    }

    #[test]
    fn test_distant_endpoints_fail() {
        // ~2 miles apart along the equator, beyond the 1 mile threshold
        let route = route_between(coord(0.0, 0.0), coord(0.0, 0.029));
        assert!(!start_end_within_threshold(&route));
    }

    #[test]
    fn test_legless_route_fails() {
        let route = RealizedRoute {
            overview_polyline: String::new(),
            summary: None,
            legs: vec![],
        };
        assert!(!start_end_within_threshold(&route));
    }
}
