use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::patient_controller::PatientController;
use crate::dto::common::ApiResponse;
use crate::dto::patient_dto::CreatePatientRequest;
use crate::models::patient::Patient;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_patient_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_patient).get(get_patients))
        .route("/:id", get(get_patient))
}

async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<Json<ApiResponse<Patient>>, AppError> {
    let controller = PatientController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, AppError> {
    let controller = PatientController::new(state.pool.clone());
    let patients = controller.list().await?;
    Ok(Json(patients))
}

async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, AppError> {
    let controller = PatientController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
