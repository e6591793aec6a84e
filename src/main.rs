mod config;
mod state;
mod database;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use services::tariff_service::{TariffConfig, TariffService};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚁 MedEvac Dispatch - Coordinación de traslados aeromédicos");
    info!("===========================================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Tarifas y velocidad de crucero desde el entorno
    let tariff = TariffService::new(TariffConfig::from_env());

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config.clone(), tariff);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/hospital", routes::hospital_routes::create_hospital_router())
        .nest("/api/aircraft", routes::aircraft_routes::create_aircraft_router())
        .nest("/api/patient", routes::patient_routes::create_patient_router())
        .nest("/api/tracking", routes::tracking_routes::create_tracking_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚑 Endpoints - Booking:");
    info!("   POST /api/booking - Crear reserva de traslado");
    info!("   GET  /api/booking - Listar reservas (filtro ?status=)");
    info!("   GET  /api/booking/pending-review - Reservas pendientes de aprobación");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   PUT  /api/booking/:id - Actualizar reserva");
    info!("   DELETE /api/booking/:id - Eliminar reserva terminal");
    info!("   POST /api/booking/:id/transition - Avanzar estado de la reserva");
    info!("   POST /api/booking/:id/cancel - Cancelar reserva");
    info!("   POST /api/booking/:id/approve - Aprobar traslado (hospital receptor)");
    info!("   POST /api/booking/:id/reject - Rechazar traslado (hospital receptor)");
    info!("🏥 Endpoints - Hospital:");
    info!("   POST /api/hospital - Registrar hospital");
    info!("   GET  /api/hospital - Listar hospitales");
    info!("   GET  /api/hospital/:id - Obtener hospital");
    info!("   PUT  /api/hospital/:id - Actualizar hospital");
    info!("   DELETE /api/hospital/:id - Eliminar hospital");
    info!("✈️ Endpoints - Aircraft:");
    info!("   POST /api/aircraft - Registrar avión");
    info!("   GET  /api/aircraft - Listar flota");
    info!("   GET  /api/aircraft/:id - Obtener avión");
    info!("   PUT  /api/aircraft/:id/position - Actualizar posición");
    info!("   PUT  /api/aircraft/:id/status - Actualizar estado operativo");
    info!("   DELETE /api/aircraft/:id - Eliminar avión");
    info!("🧑 Endpoints - Patient:");
    info!("   POST /api/patient - Registrar paciente");
    info!("   GET  /api/patient - Listar pacientes");
    info!("   GET  /api/patient/:id - Obtener paciente");
    info!("🎯 Endpoints - Tracking:");
    info!("   GET  /api/tracking/active - Aviones activos en el mapa");
    info!("   POST /api/tracking/track - Seguir un avión");
    info!("   POST /api/tracking/fly-to - Centrar cámara en un avión");
    info!("   GET  /api/tracking/state - Estado actual del seguimiento");
    info!("   GET  /api/tracking/path/:id - Ruta simulada del avión");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/summary - Resumen operativo y de ingresos");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "medevac-dispatch",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
