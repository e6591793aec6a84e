//! Controlador de pacientes
//!
//! Superficie mínima de intake: la ficha clínica completa pertenece a
//! otro sistema, aquí solo se gestiona la referencia.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::patient_dto::CreatePatientRequest;
use crate::models::patient::Patient;
use crate::repositories::patient_repository::PatientRepository;
use crate::utils::errors::AppResult;

pub struct PatientController {
    repository: PatientRepository,
}

impl PatientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PatientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreatePatientRequest) -> AppResult<ApiResponse<Patient>> {
        request.validate()?;

        let patient = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            patient,
            "Paciente registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Patient> {
        self.repository.get_by_id(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Patient>> {
        self.repository.list().await
    }
}
