//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores,
//! validación y otras funcionalidades comunes.

pub mod errors;
pub mod validation;
