//! Controlador de tracking en vivo
//!
//! Mantiene el foco único de la vista de mapa y fabrica rutas de
//! display de tres puntos a partir de la posición puntual reportada.
//! No existe telemetría real de trayectoria en el sistema; la ruta
//! simulada es una fabricación visual y queda excluida de cualquier
//! cálculo de distancia o ingresos.

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::tracking_dto::{CameraFocus, PathPoint, SimulatedPathResponse};
use crate::models::aircraft::{Aircraft, AircraftStatus};
use crate::services::geo_service::{self, GeoPoint};

/// Offset angular fijo del origen sintético de la estela, en grados
const TRAIL_OFFSET_DEG: f64 = 1.2;

/// Estado de foco compartido entre requests
#[derive(Debug, Clone, Default)]
pub struct TrackedState {
    pub tracked_aircraft_id: Option<Uuid>,
    pub camera_focus: Option<CameraFocus>,
}

/// Foco único de tracking, última escritura gana
#[derive(Clone, Default)]
pub struct TrackingController {
    state: Arc<RwLock<TrackedState>>,
}

impl TrackingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtro puro de la vista en vivo: maintenance queda fuera
    pub fn active_aircraft(all: &[Aircraft]) -> Vec<&Aircraft> {
        all.iter()
            .filter(|a| matches!(a.status, AircraftStatus::Available | AircraftStatus::InFlight))
            .collect()
    }

    /// Enfoca un avión; el foco anterior se descarta implícitamente
    pub async fn track(&self, aircraft_id: Uuid) {
        let mut state = self.state.write().await;
        state.tracked_aircraft_id = Some(aircraft_id);
        state.camera_focus = None;
    }

    pub async fn is_tracked(&self, aircraft_id: Uuid) -> bool {
        self.state.read().await.tracked_aircraft_id == Some(aircraft_id)
    }

    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.tracked_aircraft_id = None;
        state.camera_focus = None;
    }

    /// Evento de enfoque dirigido: track más centrado de cámara
    ///
    /// Equivale exactamente a track(target_id) y además devuelve el
    /// payload de cámara al renderizador, reteniéndolo como último foco.
    pub async fn fly_to(&self, target_id: Uuid, latitude: f64, longitude: f64) -> CameraFocus {
        let focus = CameraFocus { target_id, latitude, longitude };
        let mut state = self.state.write().await;
        state.tracked_aircraft_id = Some(target_id);
        state.camera_focus = Some(focus);
        focus
    }

    pub async fn snapshot(&self) -> TrackedState {
        self.state.read().await.clone()
    }

    /// Ruta de display para aviones en vuelo o el avión enfocado
    pub async fn simulated_path(&self, aircraft: &Aircraft) -> Option<SimulatedPathResponse> {
        let eligible = aircraft.status == AircraftStatus::InFlight
            || self.is_tracked(aircraft.id).await;

        if !eligible {
            return None;
        }

        Some(SimulatedPathResponse {
            aircraft_id: aircraft.id,
            points: fabricate_path(aircraft.latitude, aircraft.longitude),
        })
    }
}

/// Fabrica los tres puntos de la estela simulada
///
/// Origen sintético desplazado un delta angular fijo detrás de la
/// posición actual, la posición actual, y una proyección hacia adelante
/// que continúa el rumbo origen→actual por la mitad de la distancia de
/// la estela.
pub fn fabricate_path(latitude: f64, longitude: f64) -> [PathPoint; 3] {
    let current = GeoPoint::new(latitude, longitude);
    let origin = GeoPoint::new(
        (latitude - TRAIL_OFFSET_DEG).clamp(-90.0, 90.0),
        longitude - TRAIL_OFFSET_DEG,
    );

    let bearing = geo_service::initial_bearing(origin, current);
    let trail_km = geo_service::distance_km(origin, current);
    let projection = geo_service::destination_point(current, bearing, trail_km / 2.0);

    [
        PathPoint { latitude: origin.latitude, longitude: origin.longitude },
        PathPoint { latitude: current.latitude, longitude: current.longitude },
        PathPoint { latitude: projection.latitude, longitude: projection.longitude },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn aircraft_with(status: AircraftStatus) -> Aircraft {
        Aircraft {
            id: Uuid::new_v4(),
            registration: "VT-MED".to_string(),
            status,
            latitude: 19.0760,
            longitude: 72.8777,
            base_location: "Mumbai".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_filter_excludes_maintenance_and_preserves_order() {
        let fleet = vec![
            aircraft_with(AircraftStatus::Available),
            aircraft_with(AircraftStatus::Maintenance),
            aircraft_with(AircraftStatus::InFlight),
        ];

        let active = TrackingController::active_aircraft(&fleet);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, fleet[0].id);
        assert_eq!(active[1].id, fleet[2].id);
    }

    #[tokio::test]
    async fn test_tracking_is_single_focus_last_write_wins() {
        let controller = TrackingController::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        controller.track(first).await;
        assert!(controller.is_tracked(first).await);

        controller.track(second).await;
        assert!(!controller.is_tracked(first).await);
        assert!(controller.is_tracked(second).await);
    }

    #[tokio::test]
    async fn test_clear_drops_focus() {
        let controller = TrackingController::new();
        let id = Uuid::new_v4();

        controller.track(id).await;
        controller.clear().await;

        assert!(!controller.is_tracked(id).await);
        assert!(controller.snapshot().await.tracked_aircraft_id.is_none());
    }

    #[tokio::test]
    async fn test_fly_to_tracks_and_retains_camera_focus() {
        let controller = TrackingController::new();
        let target = Uuid::new_v4();

        let focus = controller.fly_to(target, 28.7041, 77.1025).await;
        assert_eq!(focus.target_id, target);

        let state = controller.snapshot().await;
        assert_eq!(state.tracked_aircraft_id, Some(target));
        assert_eq!(state.camera_focus, Some(focus));
    }

    #[tokio::test]
    async fn test_in_flight_aircraft_gets_a_path() {
        let controller = TrackingController::new();
        let aircraft = aircraft_with(AircraftStatus::InFlight);

        let path = controller.simulated_path(&aircraft).await;
        assert!(path.is_some());
        assert_eq!(path.unwrap().points.len(), 3);
    }

    #[tokio::test]
    async fn test_available_aircraft_gets_path_only_when_tracked() {
        let controller = TrackingController::new();
        let aircraft = aircraft_with(AircraftStatus::Available);

        assert!(controller.simulated_path(&aircraft).await.is_none());

        controller.track(aircraft.id).await;
        assert!(controller.simulated_path(&aircraft).await.is_some());
    }

    #[test]
    fn test_fabricated_path_geometry() {
        let points = fabricate_path(19.0760, 72.8777);

        // El punto medio es la posición actual
        assert!((points[1].latitude - 19.0760).abs() < 1e-9);
        assert!((points[1].longitude - 72.8777).abs() < 1e-9);

        let origin = GeoPoint::new(points[0].latitude, points[0].longitude);
        let current = GeoPoint::new(points[1].latitude, points[1].longitude);
        let projection = GeoPoint::new(points[2].latitude, points[2].longitude);

        // La proyección continúa hacia adelante la mitad de la estela
        let trail = geo_service::distance_km(origin, current);
        let lead = geo_service::distance_km(current, projection);
        assert!((lead - trail / 2.0).abs() < 1.0);

        // Y se aleja del origen, no de vuelta hacia él
        assert!(geo_service::distance_km(origin, projection) > trail);
    }
}
