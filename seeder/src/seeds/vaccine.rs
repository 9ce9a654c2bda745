use crate::seed::Seeder;
use chrono::{Duration, NaiveDate, Utc};
use db::models::vaccine::{Batch, Model, NewVaccine};
use sea_orm::{DatabaseConnection, DbErr};

pub struct VaccineSeeder;

/// (name, manufacturer, type, doses per vial, country)
const CATALOGUE: &[(&str, &str, &str, i32, &str)] = &[
    ("MMR", "Merck", "live attenuated", 10, "USA"),
    ("OPV", "Bharat Biotech", "live attenuated", 20, "India"),
    ("DTaP", "Sanofi Pasteur", "toxoid", 1, "France"),
    ("Hepatitis B", "GSK", "recombinant", 10, "Belgium"),
    ("HPV", "Merck", "recombinant", 1, "USA"),
    ("Varicella", "Merck", "live attenuated", 1, "USA"),
];

fn batches(prefix: &str, today: NaiveDate) -> Vec<Batch> {
    (1..=2)
        .map(|n| Batch {
            batch_id: format!("{}-{:03}", prefix, fastrand::u32(100..1000)),
            expiry_date: Some(today + Duration::days(180 * n)),
            received_date: Some(today - Duration::days(30 * n)),
        })
        .collect()
}

#[async_trait::async_trait]
impl Seeder for VaccineSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let today = Utc::now().date_naive();

        for (name, manufacturer, vaccine_type, doses_per_vial, country) in CATALOGUE {
            let prefix: String = name
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .take(3)
                .collect::<String>()
                .to_uppercase();

            Model::create(
                db,
                NewVaccine {
                    name: name.to_string(),
                    manufacturer: Some(manufacturer.to_string()),
                    dosage: Some("0.5 mL".into()),
                    description: Some(format!("{} vaccine for school-age children", name)),
                    storage_requirements: Some("Refrigerate at 2-8 °C. Do not freeze.".into()),
                    batches: batches(&prefix, today),
                    doses_per_vial: Some(*doses_per_vial),
                    vaccine_type: Some(vaccine_type.to_string()),
                    administer_before: Some(today + Duration::days(365)),
                    country_of_origin: Some(country.to_string()),
                    package_insert: None,
                    number_of_vials: Some(fastrand::i32(20..=200)),
                },
            )
            .await?;
        }

        Ok(())
    }
}
