use serde::Deserialize;
use validator::Validate;

// Request para registrar la referencia mínima de un paciente
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePatientRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub medical_record_number: String,
}
