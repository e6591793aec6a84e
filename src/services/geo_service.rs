//! Servicio de geometría esférica
//!
//! Funciones puras de gran círculo usadas por el motor tarifario y el
//! fabricado de rutas de display. Sin dependencias externas ni estado.

use serde::{Deserialize, Serialize};

/// Radio medio de la Tierra en kilómetros
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Par de coordenadas geográficas en grados decimales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Distancia de gran círculo entre dos puntos, fórmula de haversine
///
/// Simétrica; cero cuando ambos puntos coinciden. El resultado está en
/// kilómetros sobre el radio medio terrestre.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Rumbo inicial de a hacia b en grados (0-360)
pub fn initial_bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let x = delta_lon.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin()
        - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Punto de destino partiendo de origin con el rumbo y la distancia dados
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let angular = distance_km / EARTH_RADIUS_KM;
    let bearing_rad = bearing_deg.to_radians();
    let lat1_rad = origin.latitude.to_radians();
    let lon1_rad = origin.longitude.to_radians();

    let lat2_rad = (lat1_rad.sin() * angular.cos()
        + lat1_rad.cos() * angular.sin() * bearing_rad.cos())
    .asin();
    let lon2_rad = lon1_rad
        + (bearing_rad.sin() * angular.sin() * lat1_rad.cos())
            .atan2(angular.cos() - lat1_rad.sin() * lat2_rad.sin());

    // Normalizar longitud a [-180, 180)
    let lon_deg = (lon2_rad.to_degrees() + 540.0) % 360.0 - 180.0;

    GeoPoint::new(lat2_rad.to_degrees(), lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUMBAI: GeoPoint = GeoPoint { latitude: 19.0760, longitude: 72.8777 };
    const DELHI: GeoPoint = GeoPoint { latitude: 28.7041, longitude: 77.1025 };

    #[test]
    fn test_distance_is_symmetric() {
        let forward = distance_km(MUMBAI, DELHI);
        let backward = distance_km(DELHI, MUMBAI);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_distance_of_identical_points_is_zero() {
        assert!(distance_km(MUMBAI, MUMBAI).abs() < 1e-9);
    }

    #[test]
    fn test_mumbai_to_delhi_distance() {
        let d = distance_km(MUMBAI, DELHI);
        assert!((d - 1153.2).abs() < 5.0, "expected ~1153.2 km, got {}", d);
    }

    #[test]
    fn test_triangle_inequality_via_waypoint() {
        let jaipur = GeoPoint::new(26.9124, 75.7873);
        let direct = distance_km(MUMBAI, DELHI);
        let via = distance_km(MUMBAI, jaipur) + distance_km(jaipur, DELHI);
        assert!(direct <= via + 1e-6);
    }

    #[test]
    fn test_bearing_is_within_compass_range() {
        let b = initial_bearing(MUMBAI, DELHI);
        assert!((0.0..360.0).contains(&b));
        // Delhi queda al noreste de Mumbai
        assert!(b > 0.0 && b < 90.0);
    }

    #[test]
    fn test_destination_point_inverts_distance() {
        let bearing = initial_bearing(MUMBAI, DELHI);
        let total = distance_km(MUMBAI, DELHI);
        let reached = destination_point(MUMBAI, bearing, total);
        assert!(distance_km(reached, DELHI) < 1.0);
    }

    #[test]
    fn test_destination_point_normalizes_longitude() {
        let near_dateline = GeoPoint::new(0.0, 179.5);
        let crossed = destination_point(near_dateline, 90.0, 200.0);
        assert!(crossed.longitude >= -180.0 && crossed.longitude < 180.0);
        assert!(crossed.longitude < 0.0);
    }
}
