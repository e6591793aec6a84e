use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::aircraft_controller::AircraftController;
use crate::dto::aircraft_dto::{
    CreateAircraftRequest, UpdateAircraftPositionRequest, UpdateAircraftStatusRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::aircraft::Aircraft;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_aircraft_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_aircraft))
        .route("/", get(list_aircraft))
        .route("/:id", get(get_aircraft))
        .route("/:id/position", put(update_position))
        .route("/:id/status", put(update_status))
        .route("/:id", delete(delete_aircraft))
}

async fn create_aircraft(
    State(state): State<AppState>,
    Json(request): Json<CreateAircraftRequest>,
) -> Result<Json<ApiResponse<Aircraft>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_aircraft(
    State(state): State<AppState>,
) -> Result<Json<Vec<Aircraft>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let fleet = controller.list().await?;
    Ok(Json(fleet))
}

async fn get_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Aircraft>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let aircraft = controller.get_by_id(id).await?;
    Ok(Json(aircraft))
}

async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAircraftPositionRequest>,
) -> Result<Json<ApiResponse<Aircraft>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.update_position(id, request).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAircraftStatusRequest>,
) -> Result<Json<ApiResponse<Aircraft>>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AircraftController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Avión eliminado exitosamente"
    })))
}
