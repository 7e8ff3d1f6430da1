//! Ambassador listing criteria.

use std::cmp::Ordering;

use super::{all_of, desc_f64, parse_sort, Criterion, Filter, SortKey};
use crate::error::CoreError;
use crate::search::{any_field_contains, eq_ci};

/// Fields the ambassador listing reads.
pub trait AmbassadorRecord {
    fn name(&self) -> &str;
    fn university(&self) -> &str;
    fn program(&self) -> &str;
    fn location(&self) -> &str;
    fn specialties(&self) -> &[String];
    fn rating(&self) -> f64;
    fn review_count(&self) -> i32;
    fn students_helped(&self) -> i32;
    fn is_available(&self) -> bool;
}

/// Filter criteria for the ambassadors view.
#[derive(Debug, Clone, Default)]
pub struct AmbassadorFilter {
    /// Matches name, university, program, location, or any specialty.
    pub search: Criterion<String>,
    pub university: Criterion<String>,
    pub program: Criterion<String>,
    /// Matches when the ambassador lists this specialty.
    pub specialty: Criterion<String>,
    /// Inclusive minimum rating.
    pub rating_min: Criterion<f64>,
    /// Inclusive minimum number of students helped.
    pub experience_min: Criterion<i32>,
    pub available_only: bool,
}

impl<T: AmbassadorRecord> Filter<T> for AmbassadorFilter {
    fn matches(&self, a: &T) -> bool {
        all_of([
            self.search.admits(|needle| {
                any_field_contains(
                    [a.name(), a.university(), a.program(), a.location()]
                        .into_iter()
                        .chain(a.specialties().iter().map(String::as_str)),
                    needle,
                )
            }),
            self.university.admits(|u| eq_ci(a.university(), u)),
            self.program.admits(|p| eq_ci(a.program(), p)),
            self.specialty
                .admits(|s| a.specialties().iter().any(|t| eq_ci(t, s))),
            self.rating_min.admits(|min| a.rating() >= *min),
            self.experience_min.admits(|min| a.students_helped() >= *min),
            !self.available_only || a.is_available(),
        ])
    }
}

/// Sort keys for the ambassadors view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbassadorSort {
    /// Highest rated first.
    #[default]
    Rating,
    Name,
    University,
    /// Most students helped first.
    Experience,
    /// Most reviews first.
    Reviews,
}

const SORT_OPTIONS: &[(&str, AmbassadorSort)] = &[
    ("rating", AmbassadorSort::Rating),
    ("name", AmbassadorSort::Name),
    ("university", AmbassadorSort::University),
    ("experience", AmbassadorSort::Experience),
    ("reviews", AmbassadorSort::Reviews),
];

impl AmbassadorSort {
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        parse_sort(raw, Self::default(), SORT_OPTIONS)
    }
}

impl<T: AmbassadorRecord> SortKey<T> for AmbassadorSort {
    fn compare(self, a: &T, b: &T) -> Ordering {
        match self {
            AmbassadorSort::Rating => desc_f64(a.rating(), b.rating()),
            AmbassadorSort::Name => a.name().cmp(b.name()),
            AmbassadorSort::University => a.university().cmp(b.university()),
            AmbassadorSort::Experience => b.students_helped().cmp(&a.students_helped()),
            AmbassadorSort::Reviews => b.review_count().cmp(&a.review_count()),
        }
    }
}
