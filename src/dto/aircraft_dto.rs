use serde::Deserialize;
use validator::Validate;

use crate::models::aircraft::AircraftStatus;

// Request para registrar un avión en la flota
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAircraftRequest {
    #[validate(custom = "crate::utils::validation::validate_registration")]
    pub registration: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(length(min = 2, max = 100))]
    pub base_location: String,
}

// Request para actualizar la posición puntual reportada
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAircraftPositionRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

// Request para cambiar el estado operacional
#[derive(Debug, Deserialize)]
pub struct UpdateAircraftStatusRequest {
    pub status: AircraftStatus,
}
