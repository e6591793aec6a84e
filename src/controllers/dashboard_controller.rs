//! Controlador del dashboard operacional
//!
//! Agrega conteos por estado y los ingresos de los traslados
//! completados. Los ingresos usan la cadena de fallback tarifaria por
//! booking, así que las referencias hospitalarias colgantes degradan
//! sin fallar.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::aircraft::AircraftStatus;
use crate::models::analytics::DashboardSummary;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::hospital::Hospital;
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::hospital_repository::HospitalRepository;
use crate::services::tariff_service::TariffService;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    bookings: BookingRepository,
    hospitals: HospitalRepository,
    aircraft: AircraftRepository,
    tariff: TariffService,
}

impl DashboardController {
    pub fn new(pool: PgPool, tariff: TariffService) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            hospitals: HospitalRepository::new(pool.clone()),
            aircraft: AircraftRepository::new(pool),
            tariff,
        }
    }

    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let bookings = self.bookings.list(None).await?;
        let status_counts = self.bookings.count_by_status().await?;
        let hospitals = self.hospitals.list().await?;
        let fleet = self.aircraft.list().await?;

        let hospital_index: HashMap<Uuid, Hospital> =
            hospitals.into_iter().map(|h| (h.id, h)).collect();

        let mut bookings_by_status: BTreeMap<String, i64> = BookingStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), 0))
            .collect();
        for (status, count) in &status_counts {
            bookings_by_status.insert(status.as_str().to_string(), *count);
        }

        let total_bookings = bookings.len() as i64;
        let completed_bookings = bookings_by_status
            .get(BookingStatus::Completed.as_str())
            .copied()
            .unwrap_or(0);
        let cancelled_bookings = bookings_by_status
            .get(BookingStatus::Cancelled.as_str())
            .copied()
            .unwrap_or(0);
        let active_bookings = total_bookings - completed_bookings - cancelled_bookings;

        let (total_revenue, average_booking_revenue) =
            revenue_summary(&self.tariff, &bookings, &hospital_index);

        let total_aircraft = fleet.len() as i64;
        let available_aircraft = fleet
            .iter()
            .filter(|a| a.status == AircraftStatus::Available)
            .count() as i64;
        let aircraft_in_flight = fleet
            .iter()
            .filter(|a| a.status == AircraftStatus::InFlight)
            .count() as i64;

        log::info!(
            "📊 Dashboard: {} bookings ({} activos), ingresos {}",
            total_bookings,
            active_bookings,
            total_revenue
        );

        Ok(DashboardSummary {
            total_bookings,
            active_bookings,
            completed_bookings,
            cancelled_bookings,
            bookings_by_status,
            total_aircraft,
            available_aircraft,
            aircraft_in_flight,
            total_revenue,
            average_booking_revenue,
        })
    }
}

/// Ingreso total y promedio sobre los traslados completados
///
/// Solo los bookings en `completed` aportan a la suma; los cancelados y
/// los que siguen en curso quedan fuera. Sin completados el promedio es
/// `None`.
fn revenue_summary(
    tariff: &TariffService,
    bookings: &[Booking],
    hospitals: &HashMap<Uuid, Hospital>,
) -> (Decimal, Option<Decimal>) {
    let completed: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .collect();

    let total: Decimal = completed
        .iter()
        .map(|booking| {
            tariff.revenue_for_booking(
                booking,
                hospitals.get(&booking.origin_hospital_id),
                hospitals.get(&booking.destination_hospital_id),
            )
        })
        .sum();

    let average = if completed.is_empty() {
        None
    } else {
        Some((total / Decimal::from(completed.len() as i64)).round_dp(2))
    };

    (total, average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    use crate::models::booking::Urgency;
    use crate::services::tariff_service::TariffConfig;

    fn booking_with(
        status: BookingStatus,
        actual: Option<&str>,
        estimated: Option<&str>,
    ) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            origin_hospital_id: Uuid::new_v4(),
            destination_hospital_id: Uuid::new_v4(),
            urgency: Urgency::Emergency,
            status,
            required_equipment: Json(vec![]),
            preferred_pickup_window: now,
            estimated_cost: estimated.map(|v| v.parse().unwrap()),
            actual_cost: actual.map(|v| v.parse().unwrap()),
            estimated_flight_time_minutes: None,
            assigned_aircraft_id: None,
            timeline: Json(vec![]),
            approvals: Json(vec![]),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_revenue_sums_only_completed_bookings() {
        let tariff = TariffService::new(TariffConfig::default());
        let bookings = vec![
            booking_with(BookingStatus::Completed, Some("48000"), None),
            booking_with(BookingStatus::InTransit, None, Some("99000")),
            booking_with(BookingStatus::Cancelled, Some("77000"), None),
        ];

        let (total, average) = revenue_summary(&tariff, &bookings, &HashMap::new());

        assert_eq!(total, Decimal::from(48000));
        assert_eq!(average, Some(Decimal::from(48000)));
    }

    #[test]
    fn test_revenue_averages_over_completed_only() {
        let tariff = TariffService::new(TariffConfig::default());
        let bookings = vec![
            booking_with(BookingStatus::Completed, Some("40000"), None),
            booking_with(BookingStatus::Completed, None, Some("20000")),
            booking_with(BookingStatus::Requested, None, Some("500000")),
        ];

        let (total, average) = revenue_summary(&tariff, &bookings, &HashMap::new());

        assert_eq!(total, Decimal::from(60000));
        assert_eq!(average, Some(Decimal::from(30000)));
    }

    #[test]
    fn test_revenue_average_is_none_without_completed_bookings() {
        let tariff = TariffService::new(TariffConfig::default());
        let bookings = vec![booking_with(BookingStatus::Requested, None, Some("12000"))];

        let (total, average) = revenue_summary(&tariff, &bookings, &HashMap::new());

        assert_eq!(total, Decimal::ZERO);
        assert_eq!(average, None);
    }
}
