//! Controlador de bookings
//!
//! Orquesta la validación de requests, la máquina de estados y la
//! persistencia atómica del agregado. Los handlers HTTP delegan aquí
//! y este controlador delega las reglas puras en lifecycle_service.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{
    CancelBookingRequest, CreateBookingRequest, TransitionRequest, UpdateBookingRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::repositories::booking_repository::{BookingRepository, NewBooking};
use crate::repositories::hospital_repository::HospitalRepository;
use crate::repositories::patient_repository::PatientRepository;
use crate::services::dispatch_effects::{self, FleetDispatchEffects};
use crate::services::geo_service::GeoPoint;
use crate::services::lifecycle_service::{self, TransitionCommand};
use crate::services::tariff_service::TariffService;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct BookingController {
    bookings: BookingRepository,
    hospitals: HospitalRepository,
    aircraft: AircraftRepository,
    patients: PatientRepository,
    tariff: TariffService,
    effects: FleetDispatchEffects,
}

impl BookingController {
    pub fn new(pool: PgPool, tariff: TariffService) -> Self {
        let aircraft = AircraftRepository::new(pool.clone());
        Self {
            bookings: BookingRepository::new(pool.clone()),
            hospitals: HospitalRepository::new(pool.clone()),
            aircraft: aircraft.clone(),
            patients: PatientRepository::new(pool),
            tariff,
            effects: FleetDispatchEffects::new(aircraft),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> AppResult<ApiResponse<Booking>> {
        request.validate()?;

        if request.origin_hospital_id == request.destination_hospital_id {
            return Err(validation_error(
                "destination_hospital_id",
                "origin and destination hospitals must be different",
            ));
        }

        let origin = self.hospitals.get_by_id(request.origin_hospital_id).await?;
        let destination = self.hospitals.get_by_id(request.destination_hospital_id).await?;

        if !self.patients.exists(request.patient_id).await? {
            return Err(not_found_error("Patient", &request.patient_id.to_string()));
        }

        // Derivar costo y tiempo cuando ambos extremos tienen coordenadas;
        // si no, quedan los valores manuales del request
        let (estimated_cost, estimated_minutes) =
            match (origin.coordinates(), destination.coordinates()) {
                (Some((olat, olng)), Some((dlat, dlng))) => {
                    let (cost, minutes) = self
                        .tariff
                        .estimate_for_route(GeoPoint::new(olat, olng), GeoPoint::new(dlat, dlng));
                    (Some(cost), Some(minutes as i32))
                }
                _ => (request.estimated_cost, request.estimated_flight_time_minutes),
            };

        let actor = request.requested_by.unwrap_or_else(|| "system".to_string());

        let booking = self
            .bookings
            .create(NewBooking {
                patient_id: request.patient_id,
                origin_hospital_id: request.origin_hospital_id,
                destination_hospital_id: request.destination_hospital_id,
                urgency: request.urgency,
                required_equipment: request.required_equipment.unwrap_or_default(),
                preferred_pickup_window: request.preferred_pickup_window,
                estimated_cost,
                estimated_flight_time_minutes: estimated_minutes,
                timeline: lifecycle_service::initial_timeline(&actor),
            })
            .await?;

        log::info!(
            "🚑 Booking {} creado: {} -> {} ({})",
            booking.id,
            origin.name,
            destination.name,
            booking.urgency
        );

        Ok(ApiResponse::success_with_message(
            booking,
            "Booking creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        self.bookings.get_by_id(id).await
    }

    pub async fn list(&self, status: Option<BookingStatus>) -> AppResult<Vec<Booking>> {
        self.bookings.list(status).await
    }

    /// Edición de campos no-status, solo mientras el booking sigue en intake
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        request.validate()?;

        let current = self.bookings.get_by_id(id).await?;

        if current.is_terminal() {
            return Err(crate::utils::errors::AppError::TerminalState { status: current.status });
        }
        if !lifecycle_service::identity_editable(current.status) {
            return Err(validation_error(
                "status",
                "booking fields can only be edited while the booking is requested",
            ));
        }

        let mut updated = current.clone();

        if let Some(patient_id) = request.patient_id {
            if !self.patients.exists(patient_id).await? {
                return Err(not_found_error("Patient", &patient_id.to_string()));
            }
            updated.patient_id = patient_id;
        }
        if let Some(origin_id) = request.origin_hospital_id {
            updated.origin_hospital_id = origin_id;
        }
        if let Some(destination_id) = request.destination_hospital_id {
            updated.destination_hospital_id = destination_id;
        }

        if updated.origin_hospital_id == updated.destination_hospital_id {
            return Err(validation_error(
                "destination_hospital_id",
                "origin and destination hospitals must be different",
            ));
        }

        if let Some(urgency) = request.urgency {
            updated.urgency = urgency;
        }
        if let Some(window) = request.preferred_pickup_window {
            updated.preferred_pickup_window = window;
        }
        if let Some(equipment) = request.required_equipment.clone() {
            updated.required_equipment.0 = equipment;
        }
        if let Some(cost) = request.estimated_cost {
            updated.estimated_cost = Some(cost);
        }
        if let Some(minutes) = request.estimated_flight_time_minutes {
            updated.estimated_flight_time_minutes = Some(minutes);
        }

        // Las referencias hospitalarias se verifican siempre que cambien,
        // y el costo derivado pisa cualquier valor manual si hay coordenadas
        if request.touches_identity() {
            let origin = self.hospitals.get_by_id(updated.origin_hospital_id).await?;
            let destination = self.hospitals.get_by_id(updated.destination_hospital_id).await?;

            if let (Some((olat, olng)), Some((dlat, dlng))) =
                (origin.coordinates(), destination.coordinates())
            {
                let (cost, minutes) = self
                    .tariff
                    .estimate_for_route(GeoPoint::new(olat, olng), GeoPoint::new(dlat, dlng));
                updated.estimated_cost = Some(cost);
                updated.estimated_flight_time_minutes = Some(minutes as i32);
            }
        }

        updated.updated_at = chrono::Utc::now();

        let persisted = self.bookings.persist(&updated).await?;

        let editor = request.updated_by.unwrap_or_else(|| "system".to_string());
        log::info!("📝 Booking {} editado por {}", id, editor);

        Ok(ApiResponse::success_with_message(
            persisted,
            "Booking actualizado exitosamente".to_string(),
        ))
    }

    /// Transición guiada del ciclo de vida
    pub async fn transition(
        &self,
        id: Uuid,
        request: TransitionRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        request.validate()?;

        let current = self.bookings.get_by_id(id).await?;

        // La asignación de avión se valida contra la flota antes de aplicar
        if request.target_status == BookingStatus::CrewAssigned {
            if let Some(aircraft_id) = request.aircraft_id {
                if !self.aircraft.exists(aircraft_id).await? {
                    return Err(not_found_error("Aircraft", &aircraft_id.to_string()));
                }
            }
        }

        let outcome = lifecycle_service::apply_transition(
            &current,
            TransitionCommand {
                target: request.target_status,
                actor: request.actor,
                notes: request.notes,
                aircraft_id: request.aircraft_id,
                actual_cost: request.actual_cost,
            },
        )?;

        let persisted = self.bookings.persist(&outcome.booking).await?;

        // Efectos de flota recién después de confirmar la escritura
        dispatch_effects::apply_effects(&outcome.effects, &self.effects).await;

        log::info!("🔁 Booking {}: {} -> {}", id, current.status, persisted.status);

        Ok(ApiResponse::success(persisted))
    }

    /// Cancelación explícita, preservando el historial completo
    pub async fn cancel(
        &self,
        id: Uuid,
        request: CancelBookingRequest,
    ) -> AppResult<ApiResponse<Booking>> {
        request.validate()?;

        let current = self.bookings.get_by_id(id).await?;

        let outcome = lifecycle_service::apply_transition(
            &current,
            TransitionCommand {
                target: BookingStatus::Cancelled,
                actor: request.actor,
                notes: request.notes,
                aircraft_id: None,
                actual_cost: None,
            },
        )?;

        let persisted = self.bookings.persist(&outcome.booking).await?;

        log::info!("🚫 Booking {} cancelado", id);

        Ok(ApiResponse::success_with_message(
            persisted,
            "Booking cancelado exitosamente".to_string(),
        ))
    }

    /// Borrado administrativo, distinto de la cancelación
    ///
    /// Solo se permite sobre bookings terminales; un booking activo debe
    /// cancelarse primero para que la transición quede en el timeline.
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        let current = self.bookings.get_by_id(id).await?;

        if !current.is_terminal() {
            return Err(validation_error(
                "status",
                "active bookings must be cancelled before deletion",
            ));
        }

        self.bookings.delete(id).await?;

        log::info!("🗑️ Booking {} eliminado administrativamente", id);

        Ok(())
    }
}
