//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios encapsulan la máquina de estados del booking, el motor
//! geoespacial/tarifario y los efectos de despacho sobre la flota.

pub mod dispatch_effects;
pub mod geo_service;
pub mod lifecycle_service;
pub mod tariff_service;

pub use dispatch_effects::*;
pub use lifecycle_service::*;
pub use tariff_service::*;
