//! Repositorios de acceso a datos
//!
//! Cada repositorio envuelve el pool de Postgres y expone las queries
//! de su tabla. La lógica de negocio vive en services y controllers.

pub mod aircraft_repository;
pub mod booking_repository;
pub mod hospital_repository;
pub mod patient_repository;
