use chrono::NaiveDate;
use db::models::vaccine::{Batch, NewVaccine};
use serde::Deserialize;
use validator::{Validate, ValidationError};

#[allow(clippy::ptr_arg)]
fn validate_batches(batches: &Vec<Batch>) -> Result<(), ValidationError> {
    if batches.iter().any(|b| b.batch_id.trim().is_empty()) {
        return Err(ValidationError::new("batch_id")
            .with_message("Every batch needs a non-empty batchId".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VaccineRequest {
    #[validate(length(min = 1, message = "Vaccine name is required"))]
    pub name: String,
    pub manufacturer: Option<String>,
    pub dosage: Option<String>,
    pub description: Option<String>,
    pub storage_requirements: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_batches"))]
    pub batches: Vec<Batch>,
    #[validate(range(min = 1, message = "dosesPerVial must be at least 1"))]
    pub doses_per_vial: Option<i32>,
    pub vaccine_type: Option<String>,
    pub administer_before: Option<NaiveDate>,
    pub country_of_origin: Option<String>,
    pub package_insert: Option<String>,
    #[validate(range(min = 0, message = "numberOfVials cannot be negative"))]
    pub number_of_vials: Option<i32>,
}

impl From<VaccineRequest> for NewVaccine {
    fn from(req: VaccineRequest) -> Self {
        NewVaccine {
            name: req.name.trim().to_string(),
            manufacturer: req.manufacturer,
            dosage: req.dosage,
            description: req.description,
            storage_requirements: req.storage_requirements,
            batches: req.batches,
            doses_per_vial: req.doses_per_vial,
            vaccine_type: req.vaccine_type,
            administer_before: req.administer_before,
            country_of_origin: req.country_of_origin,
            package_insert: req.package_insert,
            number_of_vials: req.number_of_vials,
        }
    }
}
