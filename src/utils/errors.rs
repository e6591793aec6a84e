//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::booking::BookingStatus;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: booking is '{from}' and cannot move to '{to}'")]
    InvalidTransition { from: BookingStatus, to: BookingStatus },

    #[error("Booking is in terminal state '{status}' and cannot be modified")]
    TerminalState { status: BookingStatus },

    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                log::error!("❌ Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                log::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                log::warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                log::warn!("⚠️ Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::InvalidTransition { from, to } => {
                log::warn!("⚠️ Invalid transition attempt: {} -> {}", from, to);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Invalid Transition".to_string(),
                        message: format!("Booking is '{}' and cannot move to '{}'", from, to),
                        details: Some(json!({
                            "current_status": from.as_str(),
                            "attempted_status": to.as_str(),
                        })),
                        code: Some("INVALID_TRANSITION".to_string()),
                    },
                )
            }

            AppError::TerminalState { status } => {
                log::warn!("⚠️ Mutation attempt on terminal booking: {}", status);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Terminal State".to_string(),
                        message: format!(
                            "Booking is in terminal state '{}' and cannot be modified",
                            status
                        ),
                        details: Some(json!({ "current_status": status.as_str() })),
                        code: Some("TERMINAL_STATE".to_string()),
                    },
                )
            }

            AppError::ConcurrencyConflict(msg) => {
                log::warn!("⚠️ Concurrency conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Concurrency Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONCURRENCY_CONFLICT".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                log::error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de actualización concurrente
pub fn conflict_error(resource: &str, id: &str) -> AppError {
    AppError::ConcurrencyConflict(format!(
        "{} with id '{}' was modified concurrently, retry with fresh data",
        resource, id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_maps_to_conflict() {
        let err = AppError::InvalidTransition {
            from: BookingStatus::Requested,
            to: BookingStatus::InTransit,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_terminal_state_maps_to_conflict() {
        let err = AppError::TerminalState {
            status: BookingStatus::Completed,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = not_found_error("Booking", "some-id");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_transition_message_names_both_statuses() {
        let err = AppError::InvalidTransition {
            from: BookingStatus::Requested,
            to: BookingStatus::InTransit,
        };
        let msg = err.to_string();
        assert!(msg.contains("requested"));
        assert!(msg.contains("in_transit"));
    }
}
