//! Result export: step listing, raw route, GeoJSON geometry, summary, and
//! the static map image, all written under one timestamped run directory.

use crate::error::Result;
use crate::models::PlannedRoute;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::{Map, Value as JsonValue};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Files written by a successful export.
#[derive(Debug)]
pub struct ReportPaths {
    pub steps: PathBuf,
    pub raw_route: PathBuf,
    pub geojson: PathBuf,
    pub summary: PathBuf,
}

/// Writes report files into a per-run directory. The directory is an
/// explicit constructor input; nothing here reads process-global state.
pub struct RouteReporter {
    run_dir: PathBuf,
}

impl RouteReporter {
    /// Create the run directory `<base>/<timestamp>` and a reporter bound
    /// to it.
    pub fn create(base_dir: &Path) -> Result<Self> {
        let run_dir = base_dir.join(run_stamp());
        fs::create_dir_all(&run_dir)?;
        tracing::info!(dir = %run_dir.display(), "Report directory created");
        Ok(RouteReporter { run_dir })
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    pub fn export(&self, planned: &PlannedRoute) -> Result<ReportPaths> {
        let paths = ReportPaths {
            steps: self.run_dir.join("steps.txt"),
            raw_route: self.run_dir.join("route.json"),
            geojson: self.run_dir.join("route.geojson"),
            summary: self.run_dir.join("summary.txt"),
        };

        fs::write(&paths.steps, step_listing(planned))?;
        fs::write(
            &paths.raw_route,
            serde_json::to_string_pretty(&planned.realized)?,
        )?;
        fs::write(&paths.geojson, route_geojson(planned).to_string())?;
        fs::write(&paths.summary, summary_text(planned))?;

        tracing::info!(
            dir = %self.run_dir.display(),
            "Exported steps, raw route, geometry, and summary"
        );
        Ok(paths)
    }

    /// Writes the rendered static map, when one was fetched.
    pub fn write_map_image(&self, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.run_dir.join("map.png");
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Map image written");
        Ok(path)
    }
}

/// `YYYYMMDD-HHMMSS` in UTC, unique enough per run directory.
fn run_stamp() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}{:02}{:02}-{:02}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

fn step_listing(planned: &PlannedRoute) -> String {
    let mut out = String::new();
    for (leg_idx, leg) in planned.realized.legs.iter().enumerate() {
        let _ = writeln!(
            out,
            "Leg {} ({}): {},{} -> {},{}",
            leg_idx + 1,
            leg.distance.to_miles(),
            leg.start_location.lat,
            leg.start_location.lng,
            leg.end_location.lat,
            leg.end_location.lng
        );
        for step in &leg.steps {
            let _ = writeln!(
                out,
                "  {},{} -> {},{} ({})",
                step.start_location.lat,
                step.start_location.lng,
                step.end_location.lat,
                step.end_location.lng,
                step.distance.to_miles()
            );
        }
    }
    out
}

fn summary_text(planned: &PlannedRoute) -> String {
    format!(
        "route id: {}\nstops: {}\ntotal distance: {}\nloop closed (start/end within threshold): {}\n",
        planned.id,
        planned.candidate.stops.len(),
        planned.total_distance,
        if planned.endpoints_close { "yes" } else { "no" }
    )
}

/// Route geometry as a FeatureCollection: one LineString through the step
/// endpoints, plus a Point per planned stop. GeoJSON positions are
/// `[lng, lat]`.
fn route_geojson(planned: &PlannedRoute) -> GeoJson {
    let mut line: Vec<Vec<f64>> = Vec::new();
    for leg in &planned.realized.legs {
        for step in &leg.steps {
            line.push(vec![step.start_location.lng, step.start_location.lat]);
        }
        line.push(vec![leg.end_location.lng, leg.end_location.lat]);
    }

    let mut features = vec![Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(line))),
        id: None,
        properties: Some(named_properties("route")),
        foreign_members: None,
    }];

    for (idx, stop) in planned.candidate.stops.iter().enumerate() {
        let name = if idx == 0 {
            "start".to_string()
        } else {
            format!("stop {}", idx)
        };
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![stop.lng, stop.lat]))),
            id: None,
            properties: Some(named_properties(&name)),
            foreign_members: None,
        });
    }

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn named_properties(name: &str) -> Map<String, JsonValue> {
    let mut properties = Map::new();
    properties.insert("name".to_string(), JsonValue::String(name.to_string()));
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Coordinates, DistanceMeters, RealizedRoute, RouteCandidate, RouteLeg, RouteStep,
    };
    use uuid::Uuid;

    fn coord(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    fn sample_planned_route() -> PlannedRoute {
        let start = coord(37.7749, -122.4194);
        let stop = coord(37.78, -122.41);
        let realized = RealizedRoute {
            overview_polyline: "abc".to_string(),
            summary: Some("Test Loop".to_string()),
            legs: vec![RouteLeg {
                start_location: start,
                end_location: start,
                distance: DistanceMeters::from_raw(1609.344),
                steps: vec![RouteStep {
                    start_location: start,
                    end_location: stop,
                    distance: DistanceMeters::from_raw(804.672),
                    polyline: None,
                }],
            }],
        };
        PlannedRoute {
            id: Uuid::new_v4(),
            candidate: RouteCandidate::new(start, vec![stop]),
            total_distance: realized.total_distance(),
            realized,
            endpoints_close: true,
        }
    }

    fn temp_base() -> PathBuf {
        std::env::temp_dir().join(format!("looproute-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_export_writes_all_files() {
        let base = temp_base();
        let reporter = RouteReporter::create(&base).unwrap();
        let paths = reporter.export(&sample_planned_route()).unwrap();

        assert!(paths.steps.exists());
        assert!(paths.raw_route.exists());
        assert!(paths.geojson.exists());
        assert!(paths.summary.exists());

        let summary = fs::read_to_string(&paths.summary).unwrap();
        assert!(summary.contains("total distance: 1.00mi"));
        assert!(summary.contains("loop closed (start/end within threshold): yes"));

        let steps = fs::read_to_string(&paths.steps).unwrap();
        assert!(steps.contains("Leg 1"));
        assert!(steps.contains("37.7749,-122.4194 -> 37.78,-122.41"));

        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_raw_route_round_trips() {
        let base = temp_base();
        let reporter = RouteReporter::create(&base).unwrap();
        let planned = sample_planned_route();
        let paths = reporter.export(&planned).unwrap();

        let raw = fs::read_to_string(&paths.raw_route).unwrap();
        let parsed: RealizedRoute = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.overview_polyline, "abc");
        assert_eq!(parsed.legs.len(), 1);

        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_geojson_contains_line_and_stops() {
        let planned = sample_planned_route();
        let geojson = route_geojson(&planned);

        let GeoJson::FeatureCollection(fc) = geojson else {
            panic!("expected a feature collection");
        };
        // One LineString plus one Point per stop (start + 1)
        assert_eq!(fc.features.len(), 3);

        let line = fc.features[0].geometry.as_ref().unwrap();
        match &line.value {
            Value::LineString(positions) => {
                // [lng, lat] ordering
                assert_eq!(positions[0], vec![-122.4194, 37.7749]);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_write_map_image() {
        let base = temp_base();
        let reporter = RouteReporter::create(&base).unwrap();
        let path = reporter.write_map_image(&[0x89, 0x50, 0x4e, 0x47]).unwrap();

        assert_eq!(fs::read(&path).unwrap().len(), 4);
        fs::remove_dir_all(&base).unwrap();
    }
}
