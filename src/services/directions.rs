use crate::error::{AppError, Result};
use crate::models::{Coordinates, DistanceMeters, RealizedRoute, RouteLeg, RouteStep};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const GOOGLE_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Directions APIs cap the number of intermediate waypoints per request.
pub const MAX_WAYPOINTS: usize = 25;

/// Boundary to an external directions provider. The first stop is the
/// origin, the last is the destination, interior stops are waypoints.
/// `Ok(None)` means the provider found no route, which callers treat the
/// same as "no candidate" — it is not an error.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn route(&self, stops: &[Coordinates]) -> Result<Option<RealizedRoute>>;
}

#[derive(Clone)]
pub struct GoogleDirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDirectionsClient {
    pub fn new(api_key: String) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_DIRECTIONS_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, for proxies and test servers.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    async fn route(&self, stops: &[Coordinates]) -> Result<Option<RealizedRoute>> {
        if stops.len() < 2 {
            return Err(AppError::InvalidRequest(
                "At least 2 stops required".to_string(),
            ));
        }
        if stops.len() - 2 > MAX_WAYPOINTS {
            return Err(AppError::InvalidRequest(format!(
                "Maximum {} waypoints allowed",
                MAX_WAYPOINTS
            )));
        }

        let origin = format_stop(&stops[0]);
        let destination = format_stop(&stops[stops.len() - 1]);
        let waypoints = stops[1..stops.len() - 1]
            .iter()
            .map(format_stop)
            .collect::<Vec<_>>()
            .join("|");

        tracing::debug!(
            stops = stops.len(),
            origin = %origin,
            destination = %destination,
            "Directions API request: {} stops",
            stops.len()
        );

        let mut query = vec![
            ("origin", origin),
            ("destination", destination),
            ("key", self.api_key.clone()),
        ];
        if !waypoints.is_empty() {
            query.push(("waypoints", waypoints));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::DirectionsApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: GoogleDirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Failed to parse response: {}", e)))?;

        match directions.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => {
                tracing::warn!(stops = stops.len(), "Directions API returned no routes");
                return Ok(None);
            }
            other => {
                return Err(AppError::DirectionsApi(format!(
                    "Provider status {}: {}",
                    other,
                    directions.error_message.unwrap_or_default()
                )));
            }
        }

        let Some(route) = directions.routes.into_iter().next() else {
            tracing::warn!(stops = stops.len(), "Directions API returned 0 routes");
            return Ok(None);
        };

        let realized = convert_route(route);
        tracing::debug!(
            legs = realized.legs.len(),
            total = %realized.total_distance(),
            "Directions response: {} legs, {}",
            realized.legs.len(), realized.total_distance()
        );
        Ok(Some(realized))
    }
}

/// Formats a stop as the `lat,lng` pair the API expects.
fn format_stop(coords: &Coordinates) -> String {
    let rounded = coords.round(6);
    format!("{},{}", rounded.lat, rounded.lng)
}

fn convert_route(route: GoogleRoute) -> RealizedRoute {
    RealizedRoute {
        overview_polyline: route.overview_polyline.points,
        summary: route.summary.filter(|s| !s.is_empty()),
        legs: route
            .legs
            .into_iter()
            .map(|leg| RouteLeg {
                start_location: leg.start_location.into(),
                end_location: leg.end_location.into(),
                distance: DistanceMeters::from_raw(leg.distance.value),
                steps: leg
                    .steps
                    .into_iter()
                    .map(|step| RouteStep {
                        start_location: step.start_location.into(),
                        end_location: step.end_location.into(),
                        distance: DistanceMeters::from_raw(step.distance.value),
                        polyline: step.polyline.map(|p| p.points),
                    })
                    .collect(),
            })
            .collect(),
    }
}

// Google Directions API response types

#[derive(Debug, Deserialize)]
struct GoogleDirectionsApiResponse {
    status: String,
    #[serde(default)]
    routes: Vec<GoogleRoute>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleRoute {
    overview_polyline: GooglePolyline,
    legs: Vec<GoogleLeg>,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GooglePolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct GoogleLeg {
    start_location: GoogleLatLng,
    end_location: GoogleLatLng,
    distance: GoogleDistance,
    #[serde(default)]
    steps: Vec<GoogleStep>,
}

#[derive(Debug, Deserialize)]
struct GoogleStep {
    start_location: GoogleLatLng,
    end_location: GoogleLatLng,
    distance: GoogleDistance,
    #[serde(default)]
    polyline: Option<GooglePolyline>,
}

#[derive(Debug, Deserialize)]
struct GoogleLatLng {
    lat: f64,
    lng: f64,
}

impl From<GoogleLatLng> for Coordinates {
    fn from(value: GoogleLatLng) -> Self {
        // Provider coordinates are trusted; out-of-range values would have
        // been rejected by the provider itself.
        Coordinates {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleDistance {
    /// Meters.
    value: f64,
}
