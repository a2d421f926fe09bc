use async_trait::async_trait;
use looproute::models::{Coordinates, RealizedRoute, RouteLeg, RouteStep};
use looproute::services::directions::DirectionsProvider;
use looproute::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Point on the equator; 0.01 degrees of longitude is ~0.69 miles, which
/// keeps expected leg lengths easy to reason about.
#[allow(dead_code)]
pub fn equator(lng: f64) -> Coordinates {
    Coordinates::new(0.0, lng).expect("valid test coordinate")
}

/// A one-leg realized route between the given endpoints.
#[allow(dead_code)]
pub fn realized_between(start: Coordinates, end: Coordinates) -> RealizedRoute {
    RealizedRoute {
        overview_polyline: "test-polyline".to_string(),
        summary: None,
        legs: vec![RouteLeg {
            start_location: start,
            end_location: end,
            distance: start.distance_to(&end).to_meters(),
            steps: vec![RouteStep {
                start_location: start,
                end_location: end,
                distance: start.distance_to(&end).to_meters(),
                polyline: None,
            }],
        }],
    }
}

/// Directions test double: returns a fixed response and counts calls.
pub struct FixedDirections {
    response: Option<RealizedRoute>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FixedDirections {
    pub fn returning(response: Option<RealizedRoute>) -> Self {
        FixedDirections {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for FixedDirections {
    async fn route(&self, _stops: &[Coordinates]) -> Result<Option<RealizedRoute>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
