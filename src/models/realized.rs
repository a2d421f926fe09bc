use crate::models::{Coordinates, DistanceMeters, DistanceMiles};
use serde::{Deserialize, Serialize};

/// The externally routed path for a chosen candidate. Owned by the directions
/// boundary, consumed read-only by the proximity check and the reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealizedRoute {
    /// Encoded polyline covering the whole route.
    pub overview_polyline: String,
    /// Human-readable route name from the provider, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub legs: Vec<RouteLeg>,
}

/// One origin/waypoint/destination segment of the realized route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub start_location: Coordinates,
    pub end_location: Coordinates,
    pub distance: DistanceMeters,
    pub steps: Vec<RouteStep>,
}

/// One turn-by-turn instruction within a leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    pub start_location: Coordinates,
    pub end_location: Coordinates,
    pub distance: DistanceMeters,
    /// Encoded polyline for this step, when the provider supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
}

impl RealizedRoute {
    /// Total realized distance, summed over legs and converted to miles.
    pub fn total_distance(&self) -> DistanceMiles {
        let meters: f64 = self.legs.iter().map(|leg| leg.distance.as_meters()).sum();
        DistanceMeters::from_raw(meters).to_miles()
    }

    /// First leg's start and last leg's end, or `None` for a legless route.
    pub fn endpoints(&self) -> Option<(Coordinates, Coordinates)> {
        let first = self.legs.first()?;
        let last = self.legs.last()?;
        Some((first.start_location, last.end_location))
    }
}
