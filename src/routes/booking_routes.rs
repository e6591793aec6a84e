use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::approval_controller::ApprovalController;
use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    ApprovalActionRequest, BookingListQuery, CancelBookingRequest, CreateBookingRequest,
    TransitionRequest, UpdateBookingRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::booking::Booking;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/pending-review", get(list_pending_review))
        .route("/:id", get(get_booking))
        .route("/:id", put(update_booking))
        .route("/:id", delete(remove_booking))
        .route("/:id/transition", post(transition_booking))
        .route("/:id/cancel", post(cancel_booking))
        .route("/:id/approve", post(approve_booking))
        .route("/:id/reject", post(reject_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let bookings = controller.list(query.status).await?;
    Ok(Json(bookings))
}

async fn list_pending_review(
    State(state): State<AppState>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let bookings = controller.pending_review().await?;
    Ok(Json(bookings))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let booking = controller.get_by_id(id).await?;
    Ok(Json(booking))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn transition_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let response = controller.transition(id, request).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CancelBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    let response = controller.cancel(id, request).await?;
    Ok(Json(response))
}

async fn approve_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApprovalActionRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let response = controller.approve(id, request).await?;
    Ok(Json(response))
}

async fn reject_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApprovalActionRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let response = controller.reject(id, request).await?;
    Ok(Json(response))
}

async fn remove_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BookingController::new(state.pool.clone(), state.tariff.clone());
    controller.remove(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Booking eliminado exitosamente"
    })))
}
