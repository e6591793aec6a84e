use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::hospital_controller::HospitalController;
use crate::dto::common::ApiResponse;
use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::models::hospital::Hospital;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_hospital_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_hospital))
        .route("/", get(list_hospitals))
        .route("/:id", get(get_hospital))
        .route("/:id", put(update_hospital))
        .route("/:id", delete(delete_hospital))
}

async fn create_hospital(
    State(state): State<AppState>,
    Json(request): Json<CreateHospitalRequest>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_hospitals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospitals = controller.list().await?;
    Ok(Json(hospitals))
}

async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Hospital>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospital = controller.get_by_id(id).await?;
    Ok(Json(hospital))
}

async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateHospitalRequest>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Hospital eliminado exitosamente"
    })))
}
