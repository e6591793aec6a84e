//! Servicio de ciclo de vida de bookings
//!
//! Máquina de estados pura del traslado aeromédico. Valida y aplica
//! transiciones sobre el agregado en memoria; la persistencia y los
//! efectos sobre la flota quedan a cargo del caller. Ninguna función
//! de este módulo toca base de datos ni estado compartido.

use chrono::Utc;
use uuid::Uuid;

use crate::models::booking::{
    ApprovalRecord, ApprovalStatus, ApprovalType, Booking, BookingStatus, TimelineEvent,
};
use crate::utils::errors::{AppError, AppResult};

/// Efecto desacoplado producido por una transición exitosa
///
/// La máquina de estados nunca toca la colección de aviones; declara
/// el efecto y el caller lo aplica a través del sink de despacho.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEffect {
    AircraftEnteredService { aircraft_id: Uuid },
}

/// Resultado de aplicar una transición o aprobación
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub booking: Booking,
    pub effects: Vec<TransitionEffect>,
}

/// Orden de transición emitida por un operador
///
/// aircraft_id se honra al entrar a crew_assigned; actual_cost al
/// entrar a completed. En cualquier otro destino se ignoran.
#[derive(Debug, Clone)]
pub struct TransitionCommand {
    pub target: BookingStatus,
    pub actor: String,
    pub notes: Option<String>,
    pub aircraft_id: Option<Uuid>,
    pub actual_cost: Option<rust_decimal::Decimal>,
}

/// Decisión de aprobación del hospital receptor
#[derive(Debug, Clone)]
pub struct ApprovalDecision {
    pub status: ApprovalStatus,
    pub actor: String,
    pub notes: Option<String>,
}

/// Timeline inicial de un booking recién creado
pub fn initial_timeline(actor: &str) -> Vec<TimelineEvent> {
    vec![TimelineEvent {
        event: BookingStatus::Requested.timeline_label().to_string(),
        user: actor.to_string(),
        timestamp: Utc::now(),
        details: None,
    }]
}

/// Los campos de identidad solo se editan mientras el booking está en intake
pub fn identity_editable(status: BookingStatus) -> bool {
    matches!(status, BookingStatus::Requested)
}

/// Aplica una transición de estado validada
///
/// Reglas: un booking terminal no acepta nada; el destino debe ser el
/// sucesor inmediato o la cancelación. En éxito el timeline recibe una
/// entrada con la etiqueta del nuevo estado y, al entrar a in_transit
/// con avión asignado, se declara el efecto de vuelo.
pub fn apply_transition(booking: &Booking, command: TransitionCommand) -> AppResult<TransitionOutcome> {
    if booking.status.is_terminal() {
        return Err(AppError::TerminalState { status: booking.status });
    }

    let permitted = command.target == BookingStatus::Cancelled
        || booking.status.forward_successor() == Some(command.target);
    if !permitted {
        return Err(AppError::InvalidTransition {
            from: booking.status,
            to: command.target,
        });
    }

    let now = Utc::now();
    let mut updated = booking.clone();
    updated.status = command.target;
    updated.updated_at = now;

    if command.target == BookingStatus::CrewAssigned {
        if let Some(aircraft_id) = command.aircraft_id {
            updated.assigned_aircraft_id = Some(aircraft_id);
        }
    }

    if command.target == BookingStatus::Completed {
        if let Some(actual_cost) = command.actual_cost {
            updated.actual_cost = Some(actual_cost);
        }
    }

    updated.timeline.0.push(TimelineEvent {
        event: command.target.timeline_label().to_string(),
        user: command.actor,
        timestamp: now,
        details: command.notes,
    });

    let mut effects = Vec::new();
    if command.target == BookingStatus::InTransit {
        if let Some(aircraft_id) = updated.assigned_aircraft_id {
            effects.push(TransitionEffect::AircraftEnteredService { aircraft_id });
        }
    }

    Ok(TransitionOutcome { booking: updated, effects })
}

/// Aplica una decisión de aprobación del hospital receptor
///
/// Solo admisible desde requested o clinical_review. Aprobación agrega
/// el registro y avanza a dispatch_review; rechazo agrega el registro y
/// cancela. Registro y cambio de estado forman un solo resultado que el
/// caller persiste en un único UPDATE, nunca por separado.
pub fn apply_approval(booking: &Booking, decision: ApprovalDecision) -> AppResult<TransitionOutcome> {
    if booking.status.is_terminal() {
        return Err(AppError::TerminalState { status: booking.status });
    }

    let resulting_status = match decision.status {
        ApprovalStatus::Approved => BookingStatus::DispatchReview,
        ApprovalStatus::Rejected => BookingStatus::Cancelled,
    };

    let reviewable = matches!(
        booking.status,
        BookingStatus::Requested | BookingStatus::ClinicalReview
    );
    if !reviewable {
        return Err(AppError::InvalidTransition {
            from: booking.status,
            to: resulting_status,
        });
    }

    let now = Utc::now();
    let mut updated = booking.clone();
    updated.status = resulting_status;
    updated.updated_at = now;

    updated.approvals.0.push(ApprovalRecord {
        id: Uuid::new_v4(),
        approval_type: ApprovalType::ReceivingHospital,
        status: decision.status,
        approved_by: decision.actor.clone(),
        approved_at: now,
        notes: decision.notes.clone(),
    });

    updated.timeline.0.push(TimelineEvent {
        event: resulting_status.timeline_label().to_string(),
        user: decision.actor,
        timestamp: now,
        details: decision.notes,
    });

    Ok(TransitionOutcome { booking: updated, effects: Vec::new() })
}

/// Filtro puro de bookings pendientes de decisión
///
/// Sin efectos secundarios y reiniciable: preserva el orden de entrada
/// y no consume nada del slice prestado.
pub fn pending_review(bookings: &[Booking]) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| {
            matches!(
                b.status,
                BookingStatus::Requested | BookingStatus::ClinicalReview
            )
        })
        .collect()
}
