//! Repositorio de hospitales

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::models::hospital::Hospital;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct HospitalRepository {
    pool: PgPool,
}

impl HospitalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateHospitalRequest) -> AppResult<Hospital> {
        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            INSERT INTO hospitals (id, name, latitude, longitude, icu_capacity, occupied_beds, level_of_care, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.icu_capacity)
        .bind(request.occupied_beds)
        .bind(request.level_of_care)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hospital>> {
        let hospital = sqlx::query_as::<_, Hospital>("SELECT * FROM hospitals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(hospital)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Hospital> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Hospital", &id.to_string()))
    }

    pub async fn list(&self) -> AppResult<Vec<Hospital>> {
        let hospitals =
            sqlx::query_as::<_, Hospital>("SELECT * FROM hospitals ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(hospitals)
    }

    pub async fn update(&self, id: Uuid, request: UpdateHospitalRequest) -> AppResult<Hospital> {
        // Obtener hospital actual y fusionar el patch
        let current = self.get_by_id(id).await?;

        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            UPDATE hospitals
            SET name = $2, latitude = $3, longitude = $4, icu_capacity = $5, occupied_beds = $6, level_of_care = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.latitude.or(current.latitude))
        .bind(request.longitude.or(current.longitude))
        .bind(request.icu_capacity.unwrap_or(current.icu_capacity))
        .bind(request.occupied_beds.unwrap_or(current.occupied_beds))
        .bind(request.level_of_care.unwrap_or(current.level_of_care))
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Hospital", &id.to_string()));
        }

        Ok(())
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM hospitals WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
