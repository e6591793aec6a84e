//! Efectos de despacho sobre la flota
//!
//! La máquina de estados declara efectos; este módulo los aplica contra
//! la colección de aviones a través de un trait, de modo que el ciclo
//! de vida nunca queda acoplado al almacenamiento de la flota.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::aircraft::AircraftStatus;
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::services::lifecycle_service::TransitionEffect;
use crate::utils::errors::AppResult;

/// Sink de efectos producidos por transiciones del ciclo de vida
#[async_trait]
pub trait DispatchEffects: Send + Sync {
    async fn aircraft_entered_service(&self, aircraft_id: Uuid) -> AppResult<()>;
}

/// Implementación real respaldada por el repositorio de flota
#[derive(Clone)]
pub struct FleetDispatchEffects {
    aircraft_repository: AircraftRepository,
}

impl FleetDispatchEffects {
    pub fn new(aircraft_repository: AircraftRepository) -> Self {
        Self { aircraft_repository }
    }
}

#[async_trait]
impl DispatchEffects for FleetDispatchEffects {
    async fn aircraft_entered_service(&self, aircraft_id: Uuid) -> AppResult<()> {
        log::info!("🛫 Avión {} entra en servicio, marcando in_flight", aircraft_id);
        self.aircraft_repository
            .update_status(aircraft_id, AircraftStatus::InFlight)
            .await?;
        Ok(())
    }
}

/// Aplica los efectos declarados por una transición ya persistida
///
/// El booking ya quedó escrito cuando esto corre; un fallo del sink se
/// registra y no revierte la transición.
pub async fn apply_effects(effects: &[TransitionEffect], sink: &dyn DispatchEffects) {
    for effect in effects {
        match effect {
            TransitionEffect::AircraftEnteredService { aircraft_id } => {
                if let Err(e) = sink.aircraft_entered_service(*aircraft_id).await {
                    log::warn!(
                        "⚠️ No se pudo marcar el avión {} como in_flight: {}",
                        aircraft_id,
                        e
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        served: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl DispatchEffects for RecordingSink {
        async fn aircraft_entered_service(&self, aircraft_id: Uuid) -> AppResult<()> {
            self.served.lock().unwrap().push(aircraft_id);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl DispatchEffects for FailingSink {
        async fn aircraft_entered_service(&self, _aircraft_id: Uuid) -> AppResult<()> {
            Err(crate::utils::errors::AppError::Internal("fleet store down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_effects_reach_the_sink() {
        let sink = RecordingSink::default();
        let aircraft_id = Uuid::new_v4();
        let effects = vec![TransitionEffect::AircraftEnteredService { aircraft_id }];

        apply_effects(&effects, &sink).await;

        assert_eq!(*sink.served.lock().unwrap(), vec![aircraft_id]);
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_propagate() {
        let effects = vec![TransitionEffect::AircraftEnteredService { aircraft_id: Uuid::new_v4() }];
        // Solo debe loggear; la transición ya está persistida
        apply_effects(&effects, &FailingSink).await;
    }

    #[tokio::test]
    async fn test_empty_effect_list_is_a_noop() {
        let sink = RecordingSink::default();
        apply_effects(&[], &sink).await;
        assert!(sink.served.lock().unwrap().is_empty());
    }
}
