use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::common::ApiResponse;
use crate::models::analytics::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/summary", get(dashboard_summary))
}

async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), state.tariff.clone());
    let summary = controller.summary().await?;
    Ok(Json(ApiResponse::success(summary)))
}
