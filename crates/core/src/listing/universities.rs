//! University listing criteria.

use std::cmp::Ordering;

use super::{all_of, desc_f64, parse_sort, Criterion, Filter, SortKey};
use crate::error::CoreError;
use crate::search::{any_field_contains, eq_ci};

/// Fields the university listing reads.
pub trait UniversityRecord {
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    /// `Public` or `Private`.
    fn university_type(&self) -> &str;
    fn programs(&self) -> &[String];
    fn ranking(&self) -> i32;
    fn rating(&self) -> f64;
}

/// Filter criteria for the universities view.
#[derive(Debug, Clone, Default)]
pub struct UniversityFilter {
    /// Matches name, location, or any program name.
    pub search: Criterion<String>,
    pub location: Criterion<String>,
    pub university_type: Criterion<String>,
    /// Matches when the university offers this program.
    pub program: Criterion<String>,
    /// Inclusive minimum rating.
    pub rating_min: Criterion<f64>,
}

impl<T: UniversityRecord> Filter<T> for UniversityFilter {
    fn matches(&self, u: &T) -> bool {
        all_of([
            self.search.admits(|needle| {
                any_field_contains(
                    [u.name(), u.location()]
                        .into_iter()
                        .chain(u.programs().iter().map(String::as_str)),
                    needle,
                )
            }),
            self.location.admits(|l| eq_ci(u.location(), l)),
            self.university_type.admits(|t| eq_ci(u.university_type(), t)),
            self.program.admits(|p| u.programs().iter().any(|name| eq_ci(name, p))),
            self.rating_min.admits(|min| u.rating() >= *min),
        ])
    }
}

/// Sort keys for the universities view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniversitySort {
    #[default]
    Rating,
    Name,
    /// Best (lowest) ranking first.
    Ranking,
}

const SORT_OPTIONS: &[(&str, UniversitySort)] = &[
    ("rating", UniversitySort::Rating),
    ("name", UniversitySort::Name),
    ("ranking", UniversitySort::Ranking),
];

impl UniversitySort {
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        parse_sort(raw, Self::default(), SORT_OPTIONS)
    }
}

impl<T: UniversityRecord> SortKey<T> for UniversitySort {
    fn compare(self, a: &T, b: &T) -> Ordering {
        match self {
            UniversitySort::Rating => desc_f64(a.rating(), b.rating()),
            UniversitySort::Name => a.name().cmp(b.name()),
            UniversitySort::Ranking => a.ranking().cmp(&b.ranking()),
        }
    }
}

/// Stored value for a public university.
pub const TYPE_PUBLIC: &str = "Public";
/// Stored value for a private university.
pub const TYPE_PRIVATE: &str = "Private";

/// Validate a university type value. Stored values are capitalized.
pub fn validate_type(university_type: &str) -> Result<(), CoreError> {
    if university_type == TYPE_PUBLIC || university_type == TYPE_PRIVATE {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid university type '{university_type}'. Must be one of: {TYPE_PUBLIC}, {TYPE_PRIVATE}"
        )))
    }
}
