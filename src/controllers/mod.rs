//! Controladores de la aplicación
//!
//! Cada controlador orquesta repositorios y servicios para una
//! superficie de la API. Los handlers de routes delegan aquí.

pub mod aircraft_controller;
pub mod approval_controller;
pub mod booking_controller;
pub mod dashboard_controller;
pub mod hospital_controller;
pub mod patient_controller;
pub mod tracking_controller;
