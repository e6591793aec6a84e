//! Controlador de flota

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::aircraft_dto::{
    CreateAircraftRequest, UpdateAircraftPositionRequest, UpdateAircraftStatusRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::aircraft::Aircraft;
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::utils::errors::AppResult;

pub struct AircraftController {
    repository: AircraftRepository,
}

impl AircraftController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AircraftRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateAircraftRequest) -> AppResult<ApiResponse<Aircraft>> {
        request.validate()?;

        let aircraft = self.repository.create(request).await?;

        log::info!(
            "✈️ Avión {} registrado con base en {}",
            aircraft.registration,
            aircraft.base_location
        );

        Ok(ApiResponse::success_with_message(
            aircraft,
            "Avión registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Aircraft> {
        self.repository.get_by_id(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Aircraft>> {
        self.repository.list().await
    }

    pub async fn update_position(
        &self,
        id: Uuid,
        request: UpdateAircraftPositionRequest,
    ) -> AppResult<ApiResponse<Aircraft>> {
        request.validate()?;

        let aircraft = self
            .repository
            .update_position(id, request.latitude, request.longitude)
            .await?;

        Ok(ApiResponse::success(aircraft))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateAircraftStatusRequest,
    ) -> AppResult<ApiResponse<Aircraft>> {
        let aircraft = self.repository.update_status(id, request.status).await?;

        log::info!("✈️ Avión {} ahora {}", aircraft.registration, aircraft.status);

        Ok(ApiResponse::success(aircraft))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
