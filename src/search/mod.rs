//! Fixed-start subset search.
//!
//! Exhaustively enumerates every `num_points`-sized subset of the candidate
//! pool, prepends the fixed start, and keeps the best candidate under the
//! two-gate deviation/spread rule. Deliberately brute force: no pruning and
//! no early exit, so the optimum under the stated rule is always found.

pub mod combinations;

use crate::models::{CandidateScore, Coordinates, DistanceMiles, RouteCandidate};
use combinations::{binomial, IndexCombinations};

/// Find the pool subset whose fixed-start route best matches the target
/// distance.
///
/// Combinations are enumerated lexicographically over pool order and visited
/// in that order, so repeated calls with identical inputs return the same
/// candidate. Returns `None` when `num_points` exceeds the pool size (an
/// empty pool with `num_points > 0` included).
pub fn find_best_route(
    pool: &[Coordinates],
    start: Coordinates,
    target_distance: DistanceMiles,
    num_points: usize,
) -> Option<RouteCandidate> {
    if num_points > pool.len() {
        tracing::debug!(
            pool_size = pool.len(),
            num_points = num_points,
            "Pool too small for requested stop count, no candidate"
        );
        return None;
    }

    tracing::debug!(
        pool_size = pool.len(),
        num_points = num_points,
        candidates = %binomial(pool.len(), num_points),
        target = %target_distance,
        "Enumerating subset candidates"
    );

    let mut best_route: Option<RouteCandidate> = None;
    let mut best_score = CandidateScore::WORST;
    // Scratch buffer reused across combinations; only accepted candidates
    // materialize a stop sequence.
    let mut leg_buf: Vec<DistanceMiles> = Vec::with_capacity(num_points);

    for picks in IndexCombinations::new(pool.len(), num_points) {
        leg_buf.clear();
        let mut prev = &start;
        for &i in &picks {
            leg_buf.push(prev.distance_to(&pool[i]));
            prev = &pool[i];
        }

        let score = CandidateScore::from_leg_lengths(&leg_buf, target_distance);
        if score.beats(&best_score) {
            best_score = score;
            best_route = Some(RouteCandidate::from_pool(start, pool, &picks));
        }
    }

    if let Some(ref route) = best_route {
        tracing::info!(
            stops = route.stops.len(),
            total = %route.total_distance(),
            deviation = %best_score.deviation,
            spread = %best_score.spread,
            "Subset search selected a candidate"
        );
    }

    best_route
}
