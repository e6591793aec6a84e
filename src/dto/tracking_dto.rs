use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para enfocar un avión en el mapa
#[derive(Debug, Deserialize)]
pub struct TrackAircraftRequest {
    pub aircraft_id: Uuid,
}

// Request de enfoque dirigido con centrado de cámara
#[derive(Debug, Deserialize, Validate)]
pub struct FlyToRequest {
    pub target_id: Uuid,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

// Payload de centrado de cámara devuelto al renderizador
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFocus {
    pub target_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

// Estado actual del foco de tracking
#[derive(Debug, Serialize)]
pub struct TrackingStateResponse {
    pub tracked_aircraft_id: Option<Uuid>,
    pub camera_focus: Option<CameraFocus>,
}

// Punto de una ruta simulada de display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub latitude: f64,
    pub longitude: f64,
}

// Ruta simulada de tres puntos para el trazo del mapa
//
// Fabricación de display derivada de la posición puntual; nunca
// alimenta cálculos de distancia ni de ingresos.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedPathResponse {
    pub aircraft_id: Uuid,
    pub points: [PathPoint; 3],
}
