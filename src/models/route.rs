use crate::models::{Coordinates, DistanceMiles, RealizedRoute};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered stop sequence: the fixed start followed by the chosen pool
/// members, in enumeration order. Legs run between consecutive stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteCandidate {
    pub stops: Vec<Coordinates>,
}

impl RouteCandidate {
    pub fn new(start: Coordinates, picks: Vec<Coordinates>) -> Self {
        let mut stops = Vec::with_capacity(picks.len() + 1);
        stops.push(start);
        stops.extend(picks);
        RouteCandidate { stops }
    }

    /// Build from pool indices without copying the pool.
    pub fn from_pool(start: Coordinates, pool: &[Coordinates], picks: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(picks.len() + 1);
        stops.push(start);
        stops.extend(picks.iter().map(|&i| pool[i]));
        RouteCandidate { stops }
    }

    pub fn start(&self) -> &Coordinates {
        &self.stops[0]
    }

    /// Number of stops beyond the fixed start.
    pub fn num_points(&self) -> usize {
        self.stops.len() - 1
    }

    pub fn leg_lengths(&self) -> Vec<DistanceMiles> {
        self.stops
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .collect()
    }

    pub fn total_distance(&self) -> DistanceMiles {
        self.leg_lengths().into_iter().sum()
    }

    pub fn score_against(&self, target: DistanceMiles) -> CandidateScore {
        CandidateScore::from_leg_lengths(&self.leg_lengths(), target)
    }
}

/// How a candidate compares against the target: absolute deviation of the
/// total from the target, and the max-min spread of its leg lengths.
/// Lower is better on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub deviation: DistanceMiles,
    pub spread: DistanceMiles,
}

impl CandidateScore {
    /// Initial best-so-far: any real candidate beats it on both axes.
    pub const WORST: CandidateScore = CandidateScore {
        deviation: DistanceMiles::INFINITY,
        spread: DistanceMiles::INFINITY,
    };

    pub fn from_leg_lengths(legs: &[DistanceMiles], target: DistanceMiles) -> Self {
        let mut total = 0.0;
        let mut shortest = f64::INFINITY;
        let mut longest = f64::NEG_INFINITY;
        for leg in legs {
            let miles = leg.as_miles();
            total += miles;
            shortest = shortest.min(miles);
            longest = longest.max(miles);
        }
        // A legless candidate (start only) has zero spread
        let spread = if legs.is_empty() {
            0.0
        } else {
            longest - shortest
        };
        CandidateScore {
            deviation: DistanceMiles::from_raw((total - target.as_miles()).abs()),
            spread: DistanceMiles::from_raw(spread),
        }
    }

    /// Two-gate acceptance rule: a candidate replaces the incumbent only if
    /// it strictly improves deviation AND strictly improves spread. A tied
    /// deviation never replaces the incumbent, so the first-enumerated
    /// candidate wins ties, and a better deviation with a non-improved
    /// spread is skipped. Both inequalities are strict and checked in this
    /// order; callers must not relax this to a lexicographic comparison.
    pub fn beats(&self, incumbent: &CandidateScore) -> bool {
        self.deviation < incumbent.deviation && self.spread < incumbent.spread
    }
}

/// Final planner output: the chosen candidate, the externally routed path,
/// and the loop-closure verdict.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRoute {
    pub id: Uuid,
    pub candidate: RouteCandidate,
    pub realized: RealizedRoute,
    /// Realized total, summed over provider legs.
    pub total_distance: DistanceMiles,
    /// Whether the realized start and end are within the loop threshold.
    pub endpoints_close: bool,
}
