//! Repositorio de flota

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::aircraft_dto::CreateAircraftRequest;
use crate::models::aircraft::{Aircraft, AircraftStatus};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct AircraftRepository {
    pool: PgPool,
}

impl AircraftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateAircraftRequest) -> AppResult<Aircraft> {
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            INSERT INTO aircraft (id, registration, status, latitude, longitude, base_location, created_at)
            VALUES ($1, $2, 'available', $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.registration)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.base_location)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(aircraft)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Aircraft>> {
        let aircraft = sqlx::query_as::<_, Aircraft>("SELECT * FROM aircraft WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(aircraft)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Aircraft> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Aircraft", &id.to_string()))
    }

    pub async fn list(&self) -> AppResult<Vec<Aircraft>> {
        let fleet =
            sqlx::query_as::<_, Aircraft>("SELECT * FROM aircraft ORDER BY registration ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(fleet)
    }

    pub async fn update_position(&self, id: Uuid, latitude: f64, longitude: f64) -> AppResult<Aircraft> {
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            UPDATE aircraft SET latitude = $2, longitude = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .fetch_optional(&self.pool)
        .await?;

        aircraft.ok_or_else(|| not_found_error("Aircraft", &id.to_string()))
    }

    pub async fn update_status(&self, id: Uuid, status: AircraftStatus) -> AppResult<Aircraft> {
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            UPDATE aircraft SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        aircraft.ok_or_else(|| not_found_error("Aircraft", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM aircraft WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Aircraft", &id.to_string()));
        }

        Ok(())
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM aircraft WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
