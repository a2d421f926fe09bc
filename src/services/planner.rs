use crate::error::Result;
use crate::models::{Coordinates, DistanceMiles, PlannedRoute};
use crate::search;
use crate::services::directions::DirectionsProvider;
use crate::services::proximity;
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates one planning run: subset search, directions lookup,
/// loop-closure check. Holds no state across runs.
pub struct RoutePlanner {
    directions: Arc<dyn DirectionsProvider>,
}

impl RoutePlanner {
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        RoutePlanner { directions }
    }

    /// Plan a loop route. `Ok(None)` covers both "no candidate subset" and
    /// "the provider found no route" — expected outcomes, not errors. A
    /// failed loop-closure check is soft: the route is still returned with
    /// `endpoints_close = false` and callers decide export policy.
    pub async fn plan(
        &self,
        pool: &[Coordinates],
        start: Coordinates,
        target_distance: DistanceMiles,
        num_points: usize,
    ) -> Result<Option<PlannedRoute>> {
        let Some(candidate) = search::find_best_route(pool, start, target_distance, num_points)
        else {
            tracing::info!(
                pool_size = pool.len(),
                num_points = num_points,
                "No valid route found"
            );
            return Ok(None);
        };

        let Some(realized) = self.directions.route(&candidate.stops).await? else {
            tracing::info!(
                stops = candidate.stops.len(),
                "Directions provider returned no route for the selected candidate"
            );
            return Ok(None);
        };

        let endpoints_close = proximity::start_end_within_threshold(&realized);
        if !endpoints_close {
            tracing::warn!(
                "Realized route start and end are more than the loop threshold apart"
            );
        }

        let total_distance = realized.total_distance();
        tracing::info!(
            total = %total_distance,
            target = %target_distance,
            endpoints_close = endpoints_close,
            "Planned route: {} realized against a {} target",
            total_distance, target_distance
        );

        Ok(Some(PlannedRoute {
            id: Uuid::new_v4(),
            candidate,
            realized,
            total_distance,
            endpoints_close,
        }))
    }
}
