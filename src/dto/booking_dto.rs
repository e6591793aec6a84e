use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::BookingStatus;
use crate::models::booking::Urgency;

// Request para crear un booking
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub patient_id: Uuid,
    pub origin_hospital_id: Uuid,
    pub destination_hospital_id: Uuid,
    pub urgency: Urgency,
    pub preferred_pickup_window: DateTime<Utc>,

    #[validate(length(max = 20))]
    pub required_equipment: Option<Vec<String>>,

    // Valores manuales usados solo cuando faltan coordenadas hospitalarias
    pub estimated_cost: Option<Decimal>,
    pub estimated_flight_time_minutes: Option<i32>,

    #[validate(length(min = 1, max = 100))]
    pub requested_by: Option<String>,
}

// Request para editar campos no-status (solo en estado requested)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    pub patient_id: Option<Uuid>,
    pub origin_hospital_id: Option<Uuid>,
    pub destination_hospital_id: Option<Uuid>,
    pub urgency: Option<Urgency>,
    pub preferred_pickup_window: Option<DateTime<Utc>>,

    #[validate(length(max = 20))]
    pub required_equipment: Option<Vec<String>>,

    pub estimated_cost: Option<Decimal>,
    pub estimated_flight_time_minutes: Option<i32>,

    #[validate(length(min = 1, max = 100))]
    pub updated_by: Option<String>,
}

impl UpdateBookingRequest {
    /// True si el patch toca la identidad paciente/hospitales
    pub fn touches_identity(&self) -> bool {
        self.patient_id.is_some()
            || self.origin_hospital_id.is_some()
            || self.destination_hospital_id.is_some()
    }
}

// Request para una transición guiada del ciclo de vida
#[derive(Debug, Deserialize, Validate)]
pub struct TransitionRequest {
    pub target_status: BookingStatus,

    #[validate(length(min = 1, max = 100))]
    pub actor: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,

    // Honrado al entrar a crew_assigned
    pub aircraft_id: Option<Uuid>,

    // Honrado al entrar a completed
    pub actual_cost: Option<Decimal>,
}

// Request de cancelación explícita
#[derive(Debug, Deserialize, Validate)]
pub struct CancelBookingRequest {
    #[validate(length(min = 1, max = 100))]
    pub actor: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Request de aprobación o rechazo del hospital receptor
#[derive(Debug, Deserialize, Validate)]
pub struct ApprovalActionRequest {
    #[validate(length(min = 1, max = 100))]
    pub actor: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Filtros del listado de bookings
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}
