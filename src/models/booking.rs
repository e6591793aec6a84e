//! Modelo de Booking
//!
//! Este módulo contiene el agregado Booking con su ciclo de vida,
//! el timeline de eventos y el registro de aprobaciones.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::fmt;
use uuid::Uuid;

/// Estado del ciclo de vida - mapea al ENUM booking_status
///
/// La cadena de avance es estricta: cada estado solo acepta su sucesor
/// inmediato o la cancelación. Los estados terminales no aceptan nada.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Requested,
    ClinicalReview,
    DispatchReview,
    AirlineConfirmed,
    CrewAssigned,
    InTransit,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Todos los estados, en orden de avance
    pub const ALL: [BookingStatus; 8] = [
        BookingStatus::Requested,
        BookingStatus::ClinicalReview,
        BookingStatus::DispatchReview,
        BookingStatus::AirlineConfirmed,
        BookingStatus::CrewAssigned,
        BookingStatus::InTransit,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// Sucesor inmediato en la cadena de avance, si existe
    pub fn forward_successor(&self) -> Option<BookingStatus> {
        match self {
            BookingStatus::Requested => Some(BookingStatus::ClinicalReview),
            BookingStatus::ClinicalReview => Some(BookingStatus::DispatchReview),
            BookingStatus::DispatchReview => Some(BookingStatus::AirlineConfirmed),
            BookingStatus::AirlineConfirmed => Some(BookingStatus::CrewAssigned),
            BookingStatus::CrewAssigned => Some(BookingStatus::InTransit),
            BookingStatus::InTransit => Some(BookingStatus::Completed),
            BookingStatus::Completed => None,
            BookingStatus::Cancelled => None,
        }
    }

    /// Un estado terminal no admite más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Representación exacta usada en la API y la base de datos
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "requested",
            BookingStatus::ClinicalReview => "clinical_review",
            BookingStatus::DispatchReview => "dispatch_review",
            BookingStatus::AirlineConfirmed => "airline_confirmed",
            BookingStatus::CrewAssigned => "crew_assigned",
            BookingStatus::InTransit => "in_transit",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Etiqueta humana registrada en el timeline al entrar a este estado
    pub fn timeline_label(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "Booking Requested",
            BookingStatus::ClinicalReview => "Clinical Review",
            BookingStatus::DispatchReview => "Dispatch Review",
            BookingStatus::AirlineConfirmed => "Airline Confirmed",
            BookingStatus::CrewAssigned => "Crew Assigned",
            BookingStatus::InTransit => "In Transit",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Booking Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgencia clínica del traslado - mapea al ENUM urgency_level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "urgency_level", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Routine,
    Urgent,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entrada del timeline de un booking
///
/// El timeline es append-only: una entrada por cada transición de estado,
/// nunca se elimina ni se reordena.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub event: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

/// Tipo de aprobación registrada
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalType {
    ReceivingHospital,
}

/// Decisión tomada sobre el booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

/// Registro de una decisión humana de aprobación o rechazo
///
/// Inmutable una vez agregado; ningún registro puede agregarse
/// después de que el booking alcanza un estado terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApprovalRecord {
    pub id: Uuid,
    pub approval_type: ApprovalType,
    pub status: ApprovalStatus,
    pub approved_by: String,
    pub approved_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Booking principal - mapea exactamente a la tabla bookings
///
/// El timeline y las aprobaciones viven embebidos en el agregado
/// (columnas JSONB), no como entidades direccionables por separado.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub origin_hospital_id: Uuid,
    pub destination_hospital_id: Uuid,
    pub urgency: Urgency,
    pub status: BookingStatus,
    pub required_equipment: Json<Vec<String>>,
    pub preferred_pickup_window: DateTime<Utc>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub estimated_flight_time_minutes: Option<i32>,
    pub assigned_aircraft_id: Option<Uuid>,
    pub timeline: Json<Vec<TimelineEvent>>,
    pub approvals: Json<Vec<ApprovalRecord>>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spellings_are_exact() {
        let cases = [
            (BookingStatus::Requested, "requested"),
            (BookingStatus::ClinicalReview, "clinical_review"),
            (BookingStatus::DispatchReview, "dispatch_review"),
            (BookingStatus::AirlineConfirmed, "airline_confirmed"),
            (BookingStatus::CrewAssigned, "crew_assigned"),
            (BookingStatus::InTransit, "in_transit"),
            (BookingStatus::Completed, "completed"),
            (BookingStatus::Cancelled, "cancelled"),
        ];
        for (status, spelling) in cases {
            assert_eq!(status.as_str(), spelling);
            let serialized = serde_json::to_string(&status).unwrap();
            assert_eq!(serialized, format!("\"{}\"", spelling));
            let roundtrip: BookingStatus = serde_json::from_str(&serialized).unwrap();
            assert_eq!(roundtrip, status);
        }
    }

    #[test]
    fn test_urgency_wire_spellings_are_exact() {
        for (urgency, spelling) in [
            (Urgency::Routine, "routine"),
            (Urgency::Urgent, "urgent"),
            (Urgency::Emergency, "emergency"),
        ] {
            assert_eq!(serde_json::to_string(&urgency).unwrap(), format!("\"{}\"", spelling));
        }
    }

    #[test]
    fn test_forward_chain_reaches_completed() {
        let mut status = BookingStatus::Requested;
        let mut hops = 0;
        while let Some(next) = status.forward_successor() {
            status = next;
            hops += 1;
        }
        assert_eq!(status, BookingStatus::Completed);
        assert_eq!(hops, 6);
    }

    #[test]
    fn test_terminal_states_have_no_successor() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert_eq!(BookingStatus::Completed.forward_successor(), None);
        assert_eq!(BookingStatus::Cancelled.forward_successor(), None);
    }

    #[test]
    fn test_non_terminal_states() {
        for status in [
            BookingStatus::Requested,
            BookingStatus::ClinicalReview,
            BookingStatus::DispatchReview,
            BookingStatus::AirlineConfirmed,
            BookingStatus::CrewAssigned,
            BookingStatus::InTransit,
        ] {
            assert!(!status.is_terminal());
            assert!(status.forward_successor().is_some());
        }
    }
}
