use crate::constants::STATIC_MAP_SIZE;
use crate::error::{AppError, Result};
use crate::models::Coordinates;
use reqwest::Client;

const GOOGLE_STATIC_MAP_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Fetches a static map image annotated with the route polyline and a marker
/// per stop. Rendering is best-effort; callers treat failures as non-fatal.
#[derive(Clone)]
pub struct StaticMapClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StaticMapClient {
    pub fn new(api_key: String) -> Self {
        StaticMapClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_STATIC_MAP_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, for proxies and test servers.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        StaticMapClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub async fn render(&self, polyline: &str, markers: &[Coordinates]) -> Result<Vec<u8>> {
        let url = self.build_url(polyline, markers);
        tracing::debug!(markers = markers.len(), "Static map request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::StaticMapApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::StaticMapApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::StaticMapApi(format!("Failed to read image: {}", e)))?;

        tracing::debug!(bytes = bytes.len(), "Static map image received");
        Ok(bytes.to_vec())
    }

    /// The full request URL. Built by hand (rather than via query builders)
    /// so it can be logged and replayed as-is.
    fn build_url(&self, polyline: &str, markers: &[Coordinates]) -> String {
        format!(
            "{}?size={}&path={}&markers={}&key={}",
            self.base_url,
            STATIC_MAP_SIZE,
            urlencoding::encode(&format!("enc:{}", polyline)),
            urlencoding::encode(&format_markers(markers)),
            self.api_key,
        )
    }
}

/// Formats stop markers as the `lat,lng|lat,lng` list the API expects.
/// Coordinates are rounded to keep the URL short.
fn format_markers(markers: &[Coordinates]) -> String {
    markers
        .iter()
        .map(|c| {
            let rounded = c.round(5);
            format!("{},{}", rounded.lat, rounded.lng)
        })
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_base_url() {
        let client = StaticMapClient::new("test-key".to_string());
        assert_eq!(client.base_url, GOOGLE_STATIC_MAP_BASE_URL);
    }

    #[test]
    fn test_format_markers() {
        let markers = vec![
            Coordinates::new(37.77493, -122.41942).unwrap(),
            Coordinates::new(37.80437, -122.27125).unwrap(),
        ];
        assert_eq!(
            format_markers(&markers),
            "37.77493,-122.41942|37.80437,-122.27125"
        );
    }

    #[test]
    fn test_build_url_encodes_path_and_markers() {
        let client = StaticMapClient::with_base_url(
            "test-key".to_string(),
            "http://localhost:4000/staticmap".to_string(),
        );
        let markers = vec![Coordinates::new(37.77493, -122.41942).unwrap()];
        let url = client.build_url("ab|cd", &markers);

        assert!(url.starts_with("http://localhost:4000/staticmap?size="));
        // The pipe in the polyline and marker separator must be escaped
        assert!(url.contains("path=enc%3Aab%7Ccd"));
        assert!(url.contains("markers=37.77493%2C-122.41942"));
        assert!(url.ends_with("&key=test-key"));
    }
}
