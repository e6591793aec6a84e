//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::tracking_controller::TrackingController;
use crate::services::tariff_service::TariffService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub tariff: TariffService,
    pub tracking: TrackingController,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, tariff: TariffService) -> Self {
        Self {
            pool,
            config,
            tariff,
            tracking: TrackingController::new(),
        }
    }
}
