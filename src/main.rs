use looproute::config::Config;
use looproute::report::RouteReporter;
use looproute::services::directions::{DirectionsProvider, GoogleDirectionsClient};
use looproute::services::planner::RoutePlanner;
use looproute::services::static_map::StaticMapClient;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "looproute=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    tracing::info!("Configuration loaded successfully");

    let pool = config
        .load_pool()
        .map_err(|e| format!("Failed to load candidate pool: {}", e))?;
    tracing::info!(
        pool_size = pool.len(),
        target = %config.target_distance,
        num_points = config.num_points,
        "Planning a {} loop over {} candidates with {} stops",
        config.target_distance, pool.len(), config.num_points
    );

    // Initialize services
    let directions: Arc<dyn DirectionsProvider> =
        if let Some(ref base_url) = config.directions_base_url {
            Arc::new(GoogleDirectionsClient::with_base_url(
                config.api_key.clone(),
                base_url.clone(),
            ))
        } else {
            Arc::new(GoogleDirectionsClient::new(config.api_key.clone()))
        };
    let static_map = StaticMapClient::new(config.api_key.clone());
    let planner = RoutePlanner::new(directions);

    // Plan
    let Some(planned) = planner
        .plan(
            &pool,
            config.start,
            config.target_distance,
            config.num_points,
        )
        .await?
    else {
        tracing::warn!("No valid route found");
        return Ok(());
    };

    if !planned.endpoints_close {
        tracing::warn!(
            "Route does not close into a loop within the proximity threshold; exporting anyway"
        );
    }

    // Export
    let reporter = RouteReporter::create(&config.output_dir)?;
    let paths = reporter.export(&planned)?;
    tracing::info!(summary = %paths.summary.display(), "Route report written");

    // Map rendering is best-effort; the report is complete without it
    match static_map
        .render(&planned.realized.overview_polyline, &planned.candidate.stops)
        .await
    {
        Ok(bytes) => {
            reporter.write_map_image(&bytes)?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Static map rendering failed, continuing without map image");
        }
    }

    Ok(())
}
