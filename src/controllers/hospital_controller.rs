//! Controlador de hospitales

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::models::hospital::Hospital;
use crate::repositories::hospital_repository::HospitalRepository;
use crate::utils::errors::AppResult;

pub struct HospitalController {
    repository: HospitalRepository,
}

impl HospitalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: HospitalRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateHospitalRequest) -> AppResult<ApiResponse<Hospital>> {
        request.validate()?;

        let hospital = self.repository.create(request).await?;

        log::info!("🏥 Hospital {} registrado: {}", hospital.id, hospital.name);

        Ok(ApiResponse::success_with_message(
            hospital,
            "Hospital creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Hospital> {
        self.repository.get_by_id(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Hospital>> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateHospitalRequest,
    ) -> AppResult<ApiResponse<Hospital>> {
        request.validate()?;

        let hospital = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            hospital,
            "Hospital actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
