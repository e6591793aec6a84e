//! Controlador del ledger de aprobaciones
//!
//! Registra las decisiones del hospital receptor. Aprobación y cambio
//! de estado viajan en la misma escritura del agregado; nunca se
//! persisten por separado.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::ApprovalActionRequest;
use crate::dto::common::ApiResponse;
use crate::models::booking::{ApprovalStatus, Booking};
use crate::repositories::booking_repository::BookingRepository;
use crate::services::lifecycle_service::{self, ApprovalDecision};
use crate::utils::errors::AppResult;

pub struct ApprovalController {
    bookings: BookingRepository,
}

impl ApprovalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool),
        }
    }

    pub async fn approve(
        &self,
        id: Uuid,
        request: ApprovalActionRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        self.decide(id, ApprovalStatus::Approved, request).await
    }

    pub async fn reject(
        &self,
        id: Uuid,
        request: ApprovalActionRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        self.decide(id, ApprovalStatus::Rejected, request).await
    }

    /// Bookings a la espera de decisión, en el orden del listado general
    pub async fn pending_review(&self) -> AppResult<Vec<Booking>> {
        let all = self.bookings.list(None).await?;
        let pending = lifecycle_service::pending_review(&all)
            .into_iter()
            .cloned()
            .collect();
        Ok(pending)
    }

    async fn decide(
        &self,
        id: Uuid,
        status: ApprovalStatus,
        request: ApprovalActionRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        request.validate()?;

        let current = self.bookings.get_by_id(id).await?;

        let outcome = lifecycle_service::apply_approval(
            &current,
            ApprovalDecision {
                status,
                actor: request.actor.clone(),
                notes: request.notes,
            },
        )?;

        let persisted = self.bookings.persist(&outcome.booking).await?;

        let (emoji, message) = match status {
            ApprovalStatus::Approved => ("✅", "Aprobación registrada exitosamente"),
            ApprovalStatus::Rejected => ("🚫", "Rechazo registrado exitosamente"),
        };
        log::info!(
            "{} Booking {} decidido por {}: ahora {}",
            emoji,
            id,
            request.actor,
            persisted.status
        );

        Ok(ApiResponse::success_with_message(persisted, message.to_string()))
    }
}
