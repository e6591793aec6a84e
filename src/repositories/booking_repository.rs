//! Repositorio de bookings
//!
//! Acceso a la tabla bookings. Toda mutación persiste en un único
//! UPDATE que escribe el agregado completo y verifica la columna
//! version, de modo que estado, timeline y aprobaciones nunca quedan
//! observables a medias y las carreras perdidas salen como conflicto.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{ApprovalRecord, Booking, BookingStatus, TimelineEvent, Urgency};
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

// Payload de inserción armado por el controller
#[derive(Debug)]
pub struct NewBooking {
    pub patient_id: Uuid,
    pub origin_hospital_id: Uuid,
    pub destination_hospital_id: Uuid,
    pub urgency: Urgency,
    pub required_equipment: Vec<String>,
    pub preferred_pickup_window: DateTime<Utc>,
    pub estimated_cost: Option<Decimal>,
    pub estimated_flight_time_minutes: Option<i32>,
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewBooking) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, patient_id, origin_hospital_id, destination_hospital_id,
                urgency, status, required_equipment, preferred_pickup_window,
                estimated_cost, actual_cost, estimated_flight_time_minutes,
                assigned_aircraft_id, timeline, approvals, version,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, 'requested', $6, $7, $8, NULL, $9, NULL, $10, $11, 1, $12, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.patient_id)
        .bind(data.origin_hospital_id)
        .bind(data.destination_hospital_id)
        .bind(data.urgency)
        .bind(Json(data.required_equipment))
        .bind(data.preferred_pickup_window)
        .bind(data.estimated_cost)
        .bind(data.estimated_flight_time_minutes)
        .bind(Json(data.timeline))
        .bind(Json(Vec::<ApprovalRecord>::new()))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))
    }

    pub async fn list(&self, status: Option<BookingStatus>) -> AppResult<Vec<Booking>> {
        let bookings = match status {
            Some(status) => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings WHERE status = $1 ORDER BY created_at DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(bookings)
    }

    /// Escribe el agregado completo verificando la versión esperada
    ///
    /// El UPDATE lleva estado, timeline, aprobaciones y campos editables
    /// en una sola sentencia. Si la fila cambió desde la lectura, no
    /// matchea la versión y la operación sale con conflicto.
    pub async fn persist(&self, booking: &Booking) -> AppResult<Booking> {
        let persisted = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                patient_id = $3,
                origin_hospital_id = $4,
                destination_hospital_id = $5,
                urgency = $6,
                status = $7,
                required_equipment = $8,
                preferred_pickup_window = $9,
                estimated_cost = $10,
                actual_cost = $11,
                estimated_flight_time_minutes = $12,
                assigned_aircraft_id = $13,
                timeline = $14,
                approvals = $15,
                version = version + 1,
                updated_at = $16
            WHERE id = $1 AND version = $2
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.version)
        .bind(booking.patient_id)
        .bind(booking.origin_hospital_id)
        .bind(booking.destination_hospital_id)
        .bind(booking.urgency)
        .bind(booking.status)
        .bind(booking.required_equipment.clone())
        .bind(booking.preferred_pickup_window)
        .bind(booking.estimated_cost)
        .bind(booking.actual_cost)
        .bind(booking.estimated_flight_time_minutes)
        .bind(booking.assigned_aircraft_id)
        .bind(booking.timeline.clone())
        .bind(booking.approvals.clone())
        .bind(booking.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        match persisted {
            Some(updated) => Ok(updated),
            None => {
                // Distinguir fila ausente de carrera perdida
                if self.exists(booking.id).await? {
                    Err(conflict_error("Booking", &booking.id.to_string()))
                } else {
                    Err(not_found_error("Booking", &booking.id.to_string()))
                }
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Booking", &id.to_string()));
        }

        Ok(())
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM bookings WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Conteo por estado para el resumen del dashboard
    pub async fn count_by_status(&self) -> AppResult<Vec<(BookingStatus, i64)>> {
        let rows: Vec<(BookingStatus, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM bookings GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }
}
