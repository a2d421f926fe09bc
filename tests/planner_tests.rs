mod common;

use common::{equator, realized_between, FixedDirections};
use looproute::models::DistanceMiles;
use looproute::services::planner::RoutePlanner;
use std::sync::Arc;

fn miles(m: f64) -> DistanceMiles {
    DistanceMiles::from_raw(m)
}

#[tokio::test]
async fn plans_route_when_search_and_directions_succeed() {
    let start = equator(0.0);
    let pool = vec![equator(0.01), equator(0.02), equator(0.03)];
    // Realized route loops back to the start exactly
    let provider = Arc::new(FixedDirections::returning(Some(realized_between(
        start, start,
    ))));
    let planner = RoutePlanner::new(provider.clone());

    let planned = planner
        .plan(&pool, start, miles(2.0), 2)
        .await
        .unwrap()
        .expect("expected a planned route");

    assert_eq!(provider.call_count(), 1);
    assert_eq!(planned.candidate.stops.len(), 3);
    assert_eq!(*planned.candidate.start(), start);
    assert!(planned.endpoints_close);
    assert_eq!(planned.total_distance.as_miles(), 0.0);
}

#[tokio::test]
async fn provider_returning_no_route_yields_none() {
    let start = equator(0.0);
    let pool = vec![equator(0.01), equator(0.02)];
    let provider = Arc::new(FixedDirections::returning(None));
    let planner = RoutePlanner::new(provider.clone());

    let planned = planner.plan(&pool, start, miles(2.0), 2).await.unwrap();

    assert!(planned.is_none());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn empty_search_short_circuits_before_directions() {
    let start = equator(0.0);
    let pool = vec![equator(0.01)];
    let provider = Arc::new(FixedDirections::returning(Some(realized_between(
        start, start,
    ))));
    let planner = RoutePlanner::new(provider.clone());

    // num_points exceeds the pool: no candidate, provider never consulted
    let planned = planner.plan(&pool, start, miles(2.0), 5).await.unwrap();

    assert!(planned.is_none());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn distant_endpoints_are_soft_failure() {
    let start = equator(0.0);
    let pool = vec![equator(0.01), equator(0.02)];
    // Realized route ends ~2 miles from where it started
    let far_end = equator(0.029);
    let provider = Arc::new(FixedDirections::returning(Some(realized_between(
        start, far_end,
    ))));
    let planner = RoutePlanner::new(provider);

    let planned = planner
        .plan(&pool, start, miles(2.0), 2)
        .await
        .unwrap()
        .expect("route should still be returned");

    assert!(!planned.endpoints_close);
    assert!(planned.total_distance.as_miles() > 1.9);
}
