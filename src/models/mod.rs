pub mod coordinates;
pub mod distance;
pub mod realized;
pub mod route;

pub use coordinates::Coordinates;
pub use distance::{DistanceMeters, DistanceMiles};
pub use realized::{RealizedRoute, RouteLeg, RouteStep};
pub use route::{CandidateScore, PlannedRoute, RouteCandidate};
