//! In-memory filtering over the advocate list.
//!
//! The directory loads the full record set once per request and derives the
//! visible subset here. All criteria combine with logical AND; the free-text
//! search is the only predicate that ORs across fields.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;

/// Named inclusive ranges over years of experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceBucket {
    ZeroToTwo,
    ThreeToFive,
    SixToTen,
    TenPlus,
}

pub const EXPERIENCE_BUCKETS: [ExperienceBucket; 4] = [
    ExperienceBucket::ZeroToTwo,
    ExperienceBucket::ThreeToFive,
    ExperienceBucket::SixToTen,
    ExperienceBucket::TenPlus,
];

impl ExperienceBucket {
    /// Query-parameter value identifying the bucket.
    pub fn value(self) -> &'static str {
        match self {
            ExperienceBucket::ZeroToTwo => "0-2",
            ExperienceBucket::ThreeToFive => "3-5",
            ExperienceBucket::SixToTen => "6-10",
            ExperienceBucket::TenPlus => "10+",
        }
    }

    /// Human-readable label shown in the experience dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceBucket::ZeroToTwo => "0-2 years",
            ExperienceBucket::ThreeToFive => "3-5 years",
            ExperienceBucket::SixToTen => "6-10 years",
            ExperienceBucket::TenPlus => "10+ years",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        EXPERIENCE_BUCKETS.into_iter().find(|b| b.value() == value)
    }

    /// Both bounds are inclusive, so 10 years falls in `6-10` and `10+` alike.
    pub fn contains(self, years: i32) -> bool {
        match self {
            ExperienceBucket::ZeroToTwo => (0..=2).contains(&years),
            ExperienceBucket::ThreeToFive => (3..=5).contains(&years),
            ExperienceBucket::SixToTen => (6..=10).contains(&years),
            ExperienceBucket::TenPlus => years >= 10,
        }
    }
}

/// The five optional criteria governing which advocates are visible.
///
/// An absent field and an empty string both mean "no constraint". The struct
/// round-trips through the URL query string, so field order here is the order
/// parameters appear in a shared address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: Option<String>,
    pub degree: Option<String>,
    pub city: Option<String>,
    pub specialty: Option<String>,
    pub experience: Option<String>,
}

impl FilterState {
    /// Collapses empty strings to `None` so serialization omits them.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            search: self.search.filter(|s| !s.is_empty()),
            degree: self.degree.filter(|s| !s.is_empty()),
            city: self.city.filter(|s| !s.is_empty()),
            specialty: self.specialty.filter(|s| !s.is_empty()),
            experience: self.experience.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.search,
            &self.degree,
            &self.city,
            &self.specialty,
            &self.experience,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }

    /// Serializes the non-empty fields into a query string, or `None` when no
    /// criterion is active (the address stays a bare path).
    pub fn to_query_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        serde_html_form::to_string(self.clone().normalized()).ok()
    }

    /// Parses a query string back into a filter state. Unknown parameters are
    /// ignored; missing parameters leave their field unconstrained.
    pub fn from_query_string(query: &str) -> Self {
        serde_html_form::from_str::<FilterState>(query)
            .unwrap_or_default()
            .normalized()
    }

    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.matches_search(advocate)
            && self.matches_degree(advocate)
            && self.matches_city(advocate)
            && self.matches_specialty(advocate)
            && self.matches_experience(advocate)
    }

    fn matches_search(&self, advocate: &Advocate) -> bool {
        let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        advocate.first_name.to_lowercase().contains(&term)
            || advocate.last_name.to_lowercase().contains(&term)
            || advocate.city.to_lowercase().contains(&term)
            || advocate.degree.to_lowercase().contains(&term)
            || advocate
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
            || advocate.years_of_experience.to_string().contains(&term)
    }

    fn matches_degree(&self, advocate: &Advocate) -> bool {
        match self.degree.as_deref().filter(|s| !s.is_empty()) {
            Some(degree) => advocate.degree == degree,
            None => true,
        }
    }

    fn matches_city(&self, advocate: &Advocate) -> bool {
        match self.city.as_deref().filter(|s| !s.is_empty()) {
            Some(city) => advocate.city == city,
            None => true,
        }
    }

    fn matches_specialty(&self, advocate: &Advocate) -> bool {
        match self.specialty.as_deref().filter(|s| !s.is_empty()) {
            Some(specialty) => advocate.specialties.iter().any(|s| s == specialty),
            None => true,
        }
    }

    fn matches_experience(&self, advocate: &Advocate) -> bool {
        // A value outside the known buckets is carried in the URL but
        // constrains nothing.
        match self
            .experience
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(ExperienceBucket::parse)
        {
            Some(bucket) => bucket.contains(advocate.years_of_experience),
            None => true,
        }
    }
}

/// Returns the advocates satisfying every active criterion, preserving the
/// dataset ordering.
pub fn apply(advocates: &[Advocate], filter: &FilterState) -> Vec<Advocate> {
    advocates
        .iter()
        .filter(|advocate| filter.matches(advocate))
        .cloned()
        .collect()
}

/// Selectable values for the dropdown filters.
///
/// Always derived from the full unfiltered dataset so that narrowing one
/// filter never removes options from another filter's menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub degrees: Vec<String>,
    pub cities: Vec<String>,
    pub specialties: Vec<String>,
}

impl FilterOptions {
    pub fn derive(advocates: &[Advocate]) -> Self {
        let degrees: BTreeSet<&str> = advocates.iter().map(|a| a.degree.as_str()).collect();
        let cities: BTreeSet<&str> = advocates.iter().map(|a| a.city.as_str()).collect();
        let specialties: BTreeSet<&str> = advocates
            .iter()
            .flat_map(|a| a.specialties.iter().map(String::as_str))
            .collect();

        Self {
            degrees: degrees.into_iter().map(str::to_string).collect(),
            cities: cities.into_iter().map(str::to_string).collect(),
            specialties: specialties.into_iter().map(str::to_string).collect(),
        }
    }
}
