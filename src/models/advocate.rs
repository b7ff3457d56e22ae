use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
///
/// The `specialties` column holds a JSON-encoded array of strings.
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl TryFrom<Advocate> for DomainAdvocate {
    type Error = serde_json::Error;

    fn try_from(advocate: Advocate) -> Result<Self, Self::Error> {
        let specialties = serde_json::from_str(&advocate.specialties)?;
        Ok(Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        // Serializing a Vec<String> cannot fail.
        let specialties =
            serde_json::to_string(&advocate.specialties).unwrap_or_else(|_| "[]".to_string());
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_row(specialties: &str) -> Advocate {
        Advocate {
            id: 7,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            city: "Reno".to_string(),
            degree: "MD".to_string(),
            specialties: specialties.to_string(),
            years_of_experience: 10,
            phone_number: 5551234567,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn row_into_domain_decodes_specialties() {
        let domain = DomainAdvocate::try_from(sample_row(r#"["ADHD","Anxiety"]"#)).unwrap();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.specialties, vec!["ADHD", "Anxiety"]);
    }

    #[test]
    fn row_into_domain_rejects_malformed_specialties() {
        assert!(DomainAdvocate::try_from(sample_row("not json")).is_err());
    }

    #[test]
    fn from_domain_new_encodes_specialties() {
        let domain = DomainNewAdvocate::new(
            "Ann".to_string(),
            "Lee".to_string(),
            "Reno".to_string(),
            "MD".to_string(),
            vec!["ADHD".to_string()],
            10,
            5551234567,
        );
        let row: NewAdvocate = (&domain).into();
        assert_eq!(row.first_name, "Ann");
        assert_eq!(row.specialties, r#"["ADHD"]"#);
        assert_eq!(row.phone_number, 5551234567);
    }
}
