use serde::Deserialize;
use validator::Validate;

use crate::models::hospital::LevelOfCare;

// Request para registrar un hospital
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHospitalRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[validate(range(min = 0))]
    pub icu_capacity: i32,

    #[validate(range(min = 0))]
    pub occupied_beds: i32,

    pub level_of_care: LevelOfCare,
}

// Request para actualizar un hospital (incluye ocupación de camas)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHospitalRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[validate(range(min = 0))]
    pub icu_capacity: Option<i32>,

    #[validate(range(min = 0))]
    pub occupied_beds: Option<i32>,

    pub level_of_care: Option<LevelOfCare>,
}
