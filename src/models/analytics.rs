//! Modelos de Analytics
//!
//! Este módulo contiene los modelos para el resumen operacional
//! que alimenta el dashboard de despacho.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resumen para dashboard
///
/// Conteos por estado sobre el conjunto completo de bookings más la
/// agregación de ingresos calculada con la cadena de fallback tarifaria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    // Resumen de bookings
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub bookings_by_status: BTreeMap<String, i64>,

    // Resumen de flota
    pub total_aircraft: i64,
    pub available_aircraft: i64,
    pub aircraft_in_flight: i64,

    // Métricas financieras
    pub total_revenue: Decimal,
    pub average_booking_revenue: Option<Decimal>,
}
