//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y otras capas
//! transversales del servidor HTTP.

pub mod cors;

pub use cors::*;
