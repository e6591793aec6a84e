//! DTOs de la API
//!
//! Requests y responses que cruzan el borde HTTP. La validación derive
//! corre en los controllers antes de tocar cualquier repositorio.

pub mod aircraft_dto;
pub mod booking_dto;
pub mod common;
pub mod hospital_dto;
pub mod patient_dto;
pub mod tracking_dto;
