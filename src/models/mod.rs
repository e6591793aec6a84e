//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod aircraft;
pub mod analytics;
pub mod booking;
pub mod hospital;
pub mod patient;
