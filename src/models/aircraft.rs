//! Modelo de Aircraft
//!
//! Este módulo contiene el struct Aircraft y su estado operacional.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;

/// Estado operacional del avión - mapea al ENUM aircraft_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "aircraft_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AircraftStatus {
    Available,
    InFlight,
    Maintenance,
}

impl AircraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AircraftStatus::Available => "available",
            AircraftStatus::InFlight => "in_flight",
            AircraftStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for AircraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aircraft principal - mapea exactamente a la tabla aircraft
///
/// Solo se persiste la posición puntual actual; no hay vector de
/// velocidad ni historial de telemetría.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Aircraft {
    pub id: Uuid,
    pub registration: String,
    pub status: AircraftStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub base_location: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_status_wire_spellings() {
        for (status, spelling) in [
            (AircraftStatus::Available, "available"),
            (AircraftStatus::InFlight, "in_flight"),
            (AircraftStatus::Maintenance, "maintenance"),
        ] {
            assert_eq!(status.as_str(), spelling);
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", spelling));
        }
    }
}
