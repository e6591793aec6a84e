//! Modelo de Hospital
//!
//! Este módulo contiene el struct Hospital y su nivel de atención.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;

/// Nivel de atención del hospital - mapea al ENUM level_of_care
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "level_of_care", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LevelOfCare {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

impl fmt::Display for LevelOfCare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LevelOfCare::Primary => "primary",
            LevelOfCare::Secondary => "secondary",
            LevelOfCare::Tertiary => "tertiary",
            LevelOfCare::Quaternary => "quaternary",
        };
        write!(f, "{}", s)
    }
}

/// Hospital principal - mapea exactamente a la tabla hospitals
///
/// Las coordenadas son opcionales: un hospital sin posición conocida
/// sigue siendo válido, el cálculo de costos degrada a valores manuales.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hospital {
    pub id: Uuid,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub icu_capacity: i32,
    pub occupied_beds: i32,
    pub level_of_care: LevelOfCare,
    pub created_at: DateTime<Utc>,
}

impl Hospital {
    /// Coordenadas como par (lat, lng) si ambas están presentes
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital_at(latitude: Option<f64>, longitude: Option<f64>) -> Hospital {
        Hospital {
            id: Uuid::new_v4(),
            name: "General Hospital".to_string(),
            latitude,
            longitude,
            icu_capacity: 12,
            occupied_beds: 4,
            level_of_care: LevelOfCare::Tertiary,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_coordinates_requires_both_components() {
        assert_eq!(hospital_at(Some(19.0), Some(72.8)).coordinates(), Some((19.0, 72.8)));
        assert_eq!(hospital_at(Some(19.0), None).coordinates(), None);
        assert_eq!(hospital_at(None, Some(72.8)).coordinates(), None);
        assert_eq!(hospital_at(None, None).coordinates(), None);
    }

    #[test]
    fn test_level_of_care_wire_spellings() {
        for (level, spelling) in [
            (LevelOfCare::Primary, "primary"),
            (LevelOfCare::Secondary, "secondary"),
            (LevelOfCare::Tertiary, "tertiary"),
            (LevelOfCare::Quaternary, "quaternary"),
        ] {
            assert_eq!(serde_json::to_string(&level).unwrap(), format!("\"{}\"", spelling));
        }
    }
}
