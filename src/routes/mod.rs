pub mod aircraft_routes;
pub mod booking_routes;
pub mod dashboard_routes;
pub mod hospital_routes;
pub mod patient_routes;
pub mod tracking_routes;
