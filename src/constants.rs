//! Stable application-wide constants.
//!
//! Values here are structural invariants and default fallbacks for
//! env-var-based configuration. They should rarely change; anything a
//! deployment might want to tune lives in [`Config`](crate::config::Config)
//! instead.

// --- Geodesy ---

/// Mean Earth radius in miles, used by the haversine distance.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;
/// Meters per statute mile, for converting provider distances.
pub const METERS_PER_MILE: f64 = 1609.344;

// --- Route acceptance ---

/// Maximum distance between the realized route's start and end locations for
/// the route to count as a closed loop.
pub const PROXIMITY_THRESHOLD_MILES: f64 = 1.0;

// --- Search defaults (used when env vars are absent) ---

/// Default target loop length. Overridden by `ROUTE_TARGET_MILES`.
pub const DEFAULT_TARGET_DISTANCE_MILES: f64 = 10.0;
/// Default number of stops beyond the fixed start. Overridden by
/// `ROUTE_NUM_POINTS`. 9 stops plus the start make a 10-point loop.
pub const DEFAULT_NUM_POINTS: usize = 9;

// --- Export defaults ---

/// Default base directory for report output. Overridden by `OUTPUT_DIR`.
/// Each run writes into a timestamped subdirectory of this path.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Pixel size requested for the static map image.
pub const STATIC_MAP_SIZE: &str = "640x640";
