//! Wire representation of an advocate record.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::advocate::Advocate;

/// JSON shape served by `GET /api/advocates`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: String,
}

impl From<Advocate> for AdvocateDto {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate
                .created_at
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_attribute_names() {
        let dto = AdvocateDto::from(Advocate {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            city: "Reno".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["ADHD".to_string()],
            years_of_experience: 10,
            phone_number: 5551234567,
            ..Advocate::default()
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
        assert_eq!(json["yearsOfExperience"], 10);
        assert_eq!(json["phoneNumber"], 5551234567i64);
        assert!(json["createdAt"].is_string());
    }
}
