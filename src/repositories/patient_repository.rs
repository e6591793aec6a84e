//! Repositorio de pacientes

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::patient_dto::CreatePatientRequest;
use crate::models::patient::Patient;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreatePatientRequest) -> AppResult<Patient> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (id, name, medical_record_number, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.medical_record_number)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(patient)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Patient>> {
        let patient = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(patient)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Patient> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Patient", &id.to_string()))
    }

    pub async fn list(&self) -> AppResult<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(patients)
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM patients WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
