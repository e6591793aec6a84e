//! Modelo de Patient
//!
//! Registro mínimo del paciente referenciado por los bookings.
//! La ficha clínica completa es propiedad de otro sistema; aquí solo
//! se guarda lo necesario para validar la referencia.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Patient principal - mapea exactamente a la tabla patients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub medical_record_number: String,
    pub created_at: DateTime<Utc>,
}
