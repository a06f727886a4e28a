//! Tests for the StorageNodeService

use assert_matches::assert_matches;
use mockall::predicate::eq;
use std::sync::Arc;

use super::fixtures::*;
use crate::error::DashboardError;
use crate::services::StorageNodeService;
use crate::store::DashboardStore;
use crate::traits::MockNodeApi;
use crate::types::Satellite;
use shared::ApiError;

#[tokio::test]
async fn test_select_satellite_commits_fetched_value() {
    let mut api = MockNodeApi::new();
    api.expect_fetch_satellite()
        .with(eq("3"))
        .times(1)
        .returning(|id| Ok(create_test_satellite(id)));

    let store = Arc::new(DashboardStore::new());
    let service = StorageNodeService::new(Arc::new(api), store.clone());

    let satellite = service.select_satellite("3").await.unwrap();

    assert_eq!(store.snapshot().selected_satellite(), &satellite);
    assert_eq!(store.mutation_log()[0].name, "SELECT_SATELLITE");
}

#[tokio::test]
async fn test_select_satellite_keeps_selection_on_error() {
    let mut api = MockNodeApi::new();
    api.expect_fetch_satellite()
        .with(eq("1"))
        .returning(|id| Ok(create_test_satellite(id)));
    api.expect_fetch_satellite()
        .with(eq("2"))
        .returning(|_| Err(ApiError::Unauthorized));

    let store = Arc::new(DashboardStore::new());
    let service = StorageNodeService::new(Arc::new(api), store.clone());

    service.select_satellite("1").await.unwrap();
    let err = service.select_satellite("2").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(store.snapshot().selected_satellite().id, "1");
    assert_eq!(store.mutation_log().len(), 1);
}

#[tokio::test]
async fn test_missing_satellite_maps_to_not_found() {
    let mut api = MockNodeApi::new();
    api.expect_fetch_satellite()
        .returning(|_| Err(ApiError::Status { status: 404 }));

    let store = Arc::new(DashboardStore::new());
    let service = StorageNodeService::new(Arc::new(api), store);

    assert_matches!(
        service.select_satellite("ghost").await,
        Err(DashboardError::SatelliteNotFound { satellite_id }) if satellite_id == "ghost"
    );
}

#[tokio::test]
async fn test_clear_selection_restores_sentinel() {
    let mut api = MockNodeApi::new();
    api.expect_fetch_satellite()
        .returning(|id| Ok(create_test_satellite(id)));

    let store = Arc::new(DashboardStore::new());
    let service = StorageNodeService::new(Arc::new(api), store.clone());

    service.select_satellite("3").await.unwrap();
    service.clear_selection();

    assert_eq!(store.snapshot().selected_satellite(), &Satellite::default());
}
