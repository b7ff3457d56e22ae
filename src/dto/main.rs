//! Presentation DTOs backing the index page template.

use serde::Serialize;

use crate::domain::advocate::Advocate;
use crate::domain::filter::{
    EXPERIENCE_BUCKETS, ExperienceBucket, FilterOptions, FilterState,
};

/// One table row, with the display strings precomputed.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocateRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub experience_display: String,
    pub phone_number: i64,
    pub phone_display: String,
}

impl From<Advocate> for AdvocateRow {
    fn from(advocate: Advocate) -> Self {
        let experience_display = if advocate.years_of_experience == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", advocate.years_of_experience)
        };
        Self {
            id: advocate.id,
            experience_display,
            phone_display: format_phone(advocate.phone_number),
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

/// Renders a ten-digit number as `(AAA) BBB-CCCC`. Lengths other than ten are
/// not validated and produce a lopsided rendering rather than an error.
pub fn format_phone(number: i64) -> String {
    let digits = number.to_string();
    let (area, rest) = digits.split_at(digits.len().min(3));
    let (prefix, line) = rest.split_at(rest.len().min(3));
    format!("({area}) {prefix}-{line}")
}

/// Entry of the experience dropdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn experience_options() -> Vec<ExperienceOption> {
    EXPERIENCE_BUCKETS
        .into_iter()
        .map(|bucket| ExperienceOption {
            value: bucket.value(),
            label: bucket.label(),
        })
        .collect()
}

/// An active criterion shown as a chip, with a link that clears just it.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveFilter {
    pub label: String,
    pub clear_query: Option<String>,
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Advocates satisfying the current filter state, in dataset order.
    pub advocates: Vec<AdvocateRow>,
    /// Count of the filtered subset, echoed in the results line.
    pub total: usize,
    /// Dropdown options derived from the full dataset.
    pub options: FilterOptions,
    pub experience_options: Vec<ExperienceOption>,
    /// Current filter state, echoed into the form controls.
    pub filter: FilterState,
    /// Query string equivalent of `filter`, if any criterion is active.
    pub query_string: Option<String>,
    pub active_filters: Vec<ActiveFilter>,
}

impl IndexPageData {
    pub fn new(visible: Vec<Advocate>, options: FilterOptions, filter: FilterState) -> Self {
        let advocates: Vec<AdvocateRow> = visible.into_iter().map(Into::into).collect();
        let query_string = filter.to_query_string();
        let active_filters = active_filters(&filter);
        Self {
            total: advocates.len(),
            advocates,
            options,
            experience_options: experience_options(),
            filter,
            query_string,
            active_filters,
        }
    }
}

fn active_filters(filter: &FilterState) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if let Some(term) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let cleared = FilterState {
            search: None,
            ..filter.clone()
        };
        chips.push(ActiveFilter {
            label: format!("Search: {term}"),
            clear_query: cleared.to_query_string(),
        });
    }
    if let Some(degree) = filter.degree.as_deref().filter(|s| !s.is_empty()) {
        let cleared = FilterState {
            degree: None,
            ..filter.clone()
        };
        chips.push(ActiveFilter {
            label: degree.to_string(),
            clear_query: cleared.to_query_string(),
        });
    }
    if let Some(city) = filter.city.as_deref().filter(|s| !s.is_empty()) {
        let cleared = FilterState {
            city: None,
            ..filter.clone()
        };
        chips.push(ActiveFilter {
            label: city.to_string(),
            clear_query: cleared.to_query_string(),
        });
    }
    if let Some(specialty) = filter.specialty.as_deref().filter(|s| !s.is_empty()) {
        let cleared = FilterState {
            specialty: None,
            ..filter.clone()
        };
        chips.push(ActiveFilter {
            label: specialty.to_string(),
            clear_query: cleared.to_query_string(),
        });
    }
    if let Some(value) = filter.experience.as_deref().filter(|s| !s.is_empty()) {
        let cleared = FilterState {
            experience: None,
            ..filter.clone()
        };
        let label = ExperienceBucket::parse(value)
            .map(|b| b.label().to_string())
            .unwrap_or_else(|| value.to_string());
        chips.push(ActiveFilter {
            label,
            clear_query: cleared.to_query_string(),
        });
    }

    chips
}
