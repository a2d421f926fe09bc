use crate::constants::*;
use crate::models::{Coordinates, DistanceMiles};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Fixed start of every candidate route.
    pub start: Coordinates,
    pub target_distance: DistanceMiles,
    /// Stops beyond the fixed start.
    pub num_points: usize,
    /// JSON file holding the candidate pool as `[[lat, lng], ...]`.
    pub pool_file: PathBuf,
    pub output_dir: PathBuf,
    /// Optional directions base URL override, for proxies and tests.
    pub directions_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let api_key =
            env::var("GOOGLE_MAPS_API_KEY").map_err(|_| "GOOGLE_MAPS_API_KEY must be set")?;

        let start: Coordinates = env::var("ROUTE_START")
            .map_err(|_| "ROUTE_START must be set (format: 'lat,lng')".to_string())?
            .parse()
            .map_err(|e| format!("Invalid ROUTE_START: {}", e))?;

        let pool_file = PathBuf::from(
            env::var("ROUTE_POOL_FILE").map_err(|_| "ROUTE_POOL_FILE must be set")?,
        );

        let target_miles: f64 = env::var("ROUTE_TARGET_MILES")
            .unwrap_or_else(|_| DEFAULT_TARGET_DISTANCE_MILES.to_string())
            .parse()
            .map_err(|_| "Invalid ROUTE_TARGET_MILES")?;
        if target_miles <= 0.0 {
            return Err("ROUTE_TARGET_MILES must be positive".to_string());
        }
        let target_distance =
            DistanceMiles::new(target_miles).map_err(|e| format!("Invalid ROUTE_TARGET_MILES: {}", e))?;

        let num_points: usize = env::var("ROUTE_NUM_POINTS")
            .unwrap_or_else(|_| DEFAULT_NUM_POINTS.to_string())
            .parse()
            .map_err(|_| "Invalid ROUTE_NUM_POINTS")?;

        let output_dir = PathBuf::from(
            env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
        );

        Ok(Config {
            api_key,
            start,
            target_distance,
            num_points,
            pool_file,
            output_dir,
            directions_base_url: env::var("DIRECTIONS_BASE_URL").ok(),
        })
    }

    /// Load the candidate pool from the configured JSON file.
    pub fn load_pool(&self) -> Result<Vec<Coordinates>, String> {
        let raw = fs::read_to_string(&self.pool_file)
            .map_err(|e| format!("Failed to read {}: {}", self.pool_file.display(), e))?;
        parse_pool(&raw)
    }
}

/// Parse a JSON array of `[lat, lng]` pairs, validating each coordinate.
/// File order is preserved; it defines the search's enumeration order.
fn parse_pool(raw: &str) -> Result<Vec<Coordinates>, String> {
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(raw).map_err(|e| format!("Invalid pool file: {}", e))?;
    pairs
        .into_iter()
        .enumerate()
        .map(|(idx, [lat, lng])| {
            Coordinates::new(lat, lng).map_err(|e| format!("Pool entry {}: {}", idx, e))
        })
        .collect()
}
