use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::controllers::tracking_controller::TrackingController;
use crate::dto::common::ApiResponse;
use crate::dto::tracking_dto::{
    CameraFocus, FlyToRequest, SimulatedPathResponse, TrackAircraftRequest, TrackingStateResponse,
};
use crate::models::aircraft::Aircraft;
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_tracking_router() -> Router<AppState> {
    Router::new()
        .route("/active", get(active_aircraft))
        .route("/track", post(track_aircraft))
        .route("/fly-to", post(fly_to))
        .route("/state", get(tracking_state))
        .route("/path/:id", get(simulated_path))
}

async fn active_aircraft(
    State(state): State<AppState>,
) -> Result<Json<Vec<Aircraft>>, AppError> {
    let repository = AircraftRepository::new(state.pool.clone());
    let fleet = repository.list().await?;
    let active = TrackingController::active_aircraft(&fleet)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(active))
}

async fn track_aircraft(
    State(state): State<AppState>,
    Json(request): Json<TrackAircraftRequest>,
) -> Result<Json<ApiResponse<TrackingStateResponse>>, AppError> {
    let repository = AircraftRepository::new(state.pool.clone());
    if !repository.exists(request.aircraft_id).await? {
        return Err(not_found_error("Aircraft", &request.aircraft_id.to_string()));
    }

    state.tracking.track(request.aircraft_id).await;
    log::info!("🎯 Tracking avión {}", request.aircraft_id);

    let snapshot = state.tracking.snapshot().await;
    Ok(Json(ApiResponse::success(TrackingStateResponse {
        tracked_aircraft_id: snapshot.tracked_aircraft_id,
        camera_focus: snapshot.camera_focus,
    })))
}

async fn fly_to(
    State(state): State<AppState>,
    Json(request): Json<FlyToRequest>,
) -> Result<Json<ApiResponse<CameraFocus>>, AppError> {
    request.validate()?;

    let repository = AircraftRepository::new(state.pool.clone());
    if !repository.exists(request.target_id).await? {
        return Err(not_found_error("Aircraft", &request.target_id.to_string()));
    }

    let focus = state
        .tracking
        .fly_to(request.target_id, request.latitude, request.longitude)
        .await;
    log::info!(
        "🎯 Fly-to {} en ({}, {})",
        focus.target_id,
        focus.latitude,
        focus.longitude
    );

    Ok(Json(ApiResponse::success(focus)))
}

async fn tracking_state(
    State(state): State<AppState>,
) -> Result<Json<TrackingStateResponse>, AppError> {
    let snapshot = state.tracking.snapshot().await;
    Ok(Json(TrackingStateResponse {
        tracked_aircraft_id: snapshot.tracked_aircraft_id,
        camera_focus: snapshot.camera_focus,
    }))
}

async fn simulated_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SimulatedPathResponse>>, AppError> {
    let repository = AircraftRepository::new(state.pool.clone());
    let aircraft = repository.get_by_id(id).await?;

    match state.tracking.simulated_path(&aircraft).await {
        Some(path) => Ok(Json(ApiResponse::success(path))),
        None => Ok(Json(ApiResponse {
            success: true,
            message: Some("El avión no tiene ruta simulada disponible".to_string()),
            data: None,
        })),
    }
}
