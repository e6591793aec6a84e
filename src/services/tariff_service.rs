//! Servicio tarifario
//!
//! Este módulo convierte distancias de gran círculo en costos estimados
//! y tiempos de vuelo, y agrega los ingresos del dashboard con una
//! cadena de fallback estricta cuando faltan coordenadas.

use rust_decimal::Decimal;
use std::env;

use crate::models::booking::Booking;
use crate::models::hospital::Hospital;
use crate::services::geo_service::{self, GeoPoint};

const DEFAULT_BASE_FEE: &str = "25000";
const DEFAULT_PER_KM_RATE: &str = "150";
const DEFAULT_CRUISE_SPEED_KMH: f64 = 240.0;

/// Parámetros tarifarios cargados desde el entorno
///
/// Variables: TARIFF_BASE_FEE (default 25000), TARIFF_PER_KM_RATE
/// (default 150), CRUISE_SPEED_KMH (default 240). Valores negativos o
/// no parseables se descartan con warning y cae al default.
#[derive(Debug, Clone)]
pub struct TariffConfig {
    pub base_fee: Decimal,
    pub per_km_rate: Decimal,
    pub cruise_speed_kmh: f64,
}

impl TariffConfig {
    pub fn from_env() -> Self {
        Self {
            base_fee: read_decimal_var("TARIFF_BASE_FEE", DEFAULT_BASE_FEE),
            per_km_rate: read_decimal_var("TARIFF_PER_KM_RATE", DEFAULT_PER_KM_RATE),
            cruise_speed_kmh: read_speed_var("CRUISE_SPEED_KMH", DEFAULT_CRUISE_SPEED_KMH),
        }
    }
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            base_fee: DEFAULT_BASE_FEE.parse().unwrap_or_default(),
            per_km_rate: DEFAULT_PER_KM_RATE.parse().unwrap_or_default(),
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
        }
    }
}

fn read_decimal_var(name: &str, default: &str) -> Decimal {
    let fallback: Decimal = default.parse().unwrap_or_default();
    match env::var(name) {
        Ok(raw) => match raw.parse::<Decimal>() {
            Ok(value) if value >= Decimal::ZERO => value,
            Ok(value) => {
                log::warn!("⚠️ {} negativo ({}), usando default {}", name, value, default);
                fallback
            }
            Err(_) => {
                log::warn!("⚠️ {} no parseable ('{}'), usando default {}", name, raw, default);
                fallback
            }
        },
        Err(_) => fallback,
    }
}

fn read_speed_var(name: &str, default: f64) -> f64 {
    match env::var(name) {
        Ok(raw) => match raw.parse::<f64>() {
            Ok(value) if value > 0.0 && value.is_finite() => value,
            _ => {
                log::warn!("⚠️ {} inválido ('{}'), usando default {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

/// Motor de estimación de costos y tiempos
#[derive(Debug, Clone)]
pub struct TariffService {
    config: TariffConfig,
}

impl TariffService {
    pub fn new(config: TariffConfig) -> Self {
        Self { config }
    }

    /// Costo estimado: base + tarifa × km, redondeado a 2 decimales
    ///
    /// Determinística e idempotente para la misma distancia.
    pub fn estimate_cost(&self, distance_km: f64) -> Decimal {
        let distance = Decimal::from_f64_retain(distance_km.max(0.0)).unwrap_or_default();
        (self.config.base_fee + self.config.per_km_rate * distance).round_dp(2)
    }

    /// Tiempo de vuelo estimado en minutos a velocidad crucero configurada
    pub fn estimate_flight_time_minutes(&self, distance_km: f64) -> i64 {
        (distance_km.max(0.0) / self.config.cruise_speed_kmh * 60.0).round() as i64
    }

    /// Costo y tiempo para la ruta entre dos puntos conocidos
    pub fn estimate_for_route(&self, origin: GeoPoint, destination: GeoPoint) -> (Decimal, i64) {
        let distance = geo_service::distance_km(origin, destination);
        (self.estimate_cost(distance), self.estimate_flight_time_minutes(distance))
    }

    /// Ingreso atribuible a un booking para la agregación del dashboard
    ///
    /// Cadena de fallback estricta: costo calculado cuando ambos
    /// hospitales tienen coordenadas, luego actual_cost, luego
    /// estimated_cost, luego cero. Las referencias colgantes degradan,
    /// nunca fallan.
    pub fn revenue_for_booking(
        &self,
        booking: &Booking,
        origin: Option<&Hospital>,
        destination: Option<&Hospital>,
    ) -> Decimal {
        let coordinates = origin
            .and_then(Hospital::coordinates)
            .zip(destination.and_then(Hospital::coordinates));

        if let Some(((olat, olng), (dlat, dlng))) = coordinates {
            let distance = geo_service::distance_km(
                GeoPoint::new(olat, olng),
                GeoPoint::new(dlat, dlng),
            );
            return self.estimate_cost(distance);
        }

        booking
            .actual_cost
            .or(booking.estimated_cost)
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, Urgency};
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    const MUMBAI: GeoPoint = GeoPoint { latitude: 19.0760, longitude: 72.8777 };
    const DELHI: GeoPoint = GeoPoint { latitude: 28.7041, longitude: 77.1025 };

    fn service() -> TariffService {
        TariffService::new(TariffConfig::default())
    }

    fn booking_with_costs(actual: Option<Decimal>, estimated: Option<Decimal>) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            origin_hospital_id: Uuid::new_v4(),
            destination_hospital_id: Uuid::new_v4(),
            urgency: Urgency::Urgent,
            status: BookingStatus::Requested,
            required_equipment: Json(vec![]),
            preferred_pickup_window: now,
            estimated_cost: estimated,
            actual_cost: actual,
            estimated_flight_time_minutes: None,
            assigned_aircraft_id: None,
            timeline: Json(vec![]),
            approvals: Json(vec![]),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn hospital_at(coordinates: Option<(f64, f64)>) -> Hospital {
        use crate::models::hospital::LevelOfCare;
        Hospital {
            id: Uuid::new_v4(),
            name: "Test Hospital".to_string(),
            latitude: coordinates.map(|c| c.0),
            longitude: coordinates.map(|c| c.1),
            icu_capacity: 10,
            occupied_beds: 2,
            level_of_care: LevelOfCare::Tertiary,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cost_is_monotonic_in_distance() {
        let s = service();
        let short = s.estimate_cost(100.0);
        let long = s.estimate_cost(500.0);
        assert!(long > short);
        assert_eq!(s.estimate_cost(0.0), Decimal::new(25000, 0));
    }

    #[test]
    fn test_cost_is_idempotent() {
        let s = service();
        let d = crate::services::geo_service::distance_km(MUMBAI, DELHI);
        assert_eq!(s.estimate_cost(d), s.estimate_cost(d));
    }

    #[test]
    fn test_mumbai_delhi_scenario() {
        let s = service();
        let d = crate::services::geo_service::distance_km(MUMBAI, DELHI);
        assert!((d - 1153.2).abs() < 5.0);
        let cost = s.estimate_cost(d);
        // base 25000 + 150/km sobre ~1153 km
        assert!(cost > Decimal::new(190_000, 0) && cost < Decimal::new(200_000, 0));
    }

    #[test]
    fn test_flight_time_at_cruise_speed() {
        let s = service();
        // 240 km a 240 km/h son 60 minutos
        assert_eq!(s.estimate_flight_time_minutes(240.0), 60);
        assert_eq!(s.estimate_flight_time_minutes(0.0), 0);
    }

    #[test]
    fn test_revenue_prefers_computed_estimate() {
        let s = service();
        let booking = booking_with_costs(
            Some(Decimal::new(99, 0)),
            Some(Decimal::new(11, 0)),
        );
        let origin = hospital_at(Some((MUMBAI.latitude, MUMBAI.longitude)));
        let destination = hospital_at(Some((DELHI.latitude, DELHI.longitude)));

        let revenue = s.revenue_for_booking(&booking, Some(&origin), Some(&destination));
        let expected = s.estimate_cost(crate::services::geo_service::distance_km(MUMBAI, DELHI));
        assert_eq!(revenue, expected);
    }

    #[test]
    fn test_revenue_falls_back_to_actual_then_estimated_then_zero() {
        let s = service();
        let origin = hospital_at(None);
        let destination = hospital_at(Some((DELHI.latitude, DELHI.longitude)));

        let with_actual = booking_with_costs(Some(Decimal::new(4200, 0)), Some(Decimal::new(11, 0)));
        assert_eq!(
            s.revenue_for_booking(&with_actual, Some(&origin), Some(&destination)),
            Decimal::new(4200, 0)
        );

        let with_estimate = booking_with_costs(None, Some(Decimal::new(1100, 0)));
        assert_eq!(
            s.revenue_for_booking(&with_estimate, Some(&origin), Some(&destination)),
            Decimal::new(1100, 0)
        );

        let bare = booking_with_costs(None, None);
        assert_eq!(
            s.revenue_for_booking(&bare, Some(&origin), Some(&destination)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_revenue_degrades_on_dangling_hospitals() {
        let s = service();
        let booking = booking_with_costs(None, Some(Decimal::new(777, 0)));
        assert_eq!(s.revenue_for_booking(&booking, None, None), Decimal::new(777, 0));
    }
}
