//! Scholarship listing criteria.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::{all_of, parse_sort, Criterion, Filter, SortKey};
use crate::error::CoreError;
use crate::search::{any_field_contains, eq_ci};

/// Scholarship accepting applications.
pub const STATUS_OPEN: &str = "open";
/// Scholarship no longer accepting applications.
pub const STATUS_CLOSED: &str = "closed";

/// Fields the scholarship listing reads.
pub trait ScholarshipRecord {
    fn title(&self) -> &str;
    fn provider(&self) -> &str;
    fn scholarship_type(&self) -> &str;
    fn level(&self) -> &str;
    fn fields(&self) -> &[String];
    fn description(&self) -> &str;
    fn deadline(&self) -> NaiveDate;
    fn status(&self) -> &str;
}

/// Filter criteria for the scholarships view.
#[derive(Debug, Clone, Default)]
pub struct ScholarshipFilter {
    /// Matches title, provider, description, or any field tag.
    pub search: Criterion<String>,
    pub scholarship_type: Criterion<String>,
    pub level: Criterion<String>,
    /// Matches when the scholarship lists this field of study.
    pub field: Criterion<String>,
    pub status: Criterion<String>,
}

impl<T: ScholarshipRecord> Filter<T> for ScholarshipFilter {
    fn matches(&self, s: &T) -> bool {
        all_of([
            self.search.admits(|needle| {
                any_field_contains(
                    [s.title(), s.provider(), s.description()]
                        .into_iter()
                        .chain(s.fields().iter().map(String::as_str)),
                    needle,
                )
            }),
            self.scholarship_type
                .admits(|t| eq_ci(s.scholarship_type(), t)),
            self.level.admits(|l| eq_ci(s.level(), l)),
            self.field.admits(|f| s.fields().iter().any(|tag| eq_ci(tag, f))),
            self.status.admits(|st| eq_ci(s.status(), st)),
        ])
    }
}

/// Sort keys for the scholarships view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScholarshipSort {
    /// Soonest deadline first.
    #[default]
    Deadline,
    Title,
    Provider,
}

const SORT_OPTIONS: &[(&str, ScholarshipSort)] = &[
    ("deadline", ScholarshipSort::Deadline),
    ("title", ScholarshipSort::Title),
    ("provider", ScholarshipSort::Provider),
];

impl ScholarshipSort {
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        parse_sort(raw, Self::default(), SORT_OPTIONS)
    }
}

impl<T: ScholarshipRecord> SortKey<T> for ScholarshipSort {
    fn compare(self, a: &T, b: &T) -> Ordering {
        match self {
            ScholarshipSort::Deadline => a.deadline().cmp(&b.deadline()),
            ScholarshipSort::Title => a.title().cmp(b.title()),
            ScholarshipSort::Provider => a.provider().cmp(b.provider()),
        }
    }
}

/// Validate a scholarship status value.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if status == STATUS_OPEN || status == STATUS_CLOSED {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid scholarship status '{status}'. Must be one of: {STATUS_OPEN}, {STATUS_CLOSED}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::refine;

    #[derive(Debug, Clone, PartialEq)]
    struct Award {
        title: &'static str,
        provider: &'static str,
        kind: &'static str,
        level: &'static str,
        fields: Vec<String>,
        deadline: NaiveDate,
        status: &'static str,
    }

    impl ScholarshipRecord for Award {
        fn title(&self) -> &str {
            self.title
        }
        fn provider(&self) -> &str {
            self.provider
        }
        fn scholarship_type(&self) -> &str {
            self.kind
        }
        fn level(&self) -> &str {
            self.level
        }
        fn fields(&self) -> &[String] {
            &self.fields
        }
        fn description(&self) -> &str {
            "Covers tuition and living costs"
        }
        fn deadline(&self) -> NaiveDate {
            self.deadline
        }
        fn status(&self) -> &str {
            self.status
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn awards() -> Vec<Award> {
        vec![
            Award {
                title: "Fulbright",
                provider: "USEFP",
                kind: "Fully Funded",
                level: "Masters",
                fields: vec!["Any".into()],
                deadline: date(5, 15),
                status: STATUS_OPEN,
            },
            Award {
                title: "Chevening",
                provider: "UK Government",
                kind: "Fully Funded",
                level: "Masters",
                fields: vec!["Public Policy".into(), "Engineering".into()],
                deadline: date(11, 1),
                status: STATUS_CLOSED,
            },
            Award {
                title: "HEC Need-Based",
                provider: "HEC",
                kind: "Need-Based",
                level: "Undergraduate",
                fields: vec!["Engineering".into()],
                deadline: date(3, 30),
                status: STATUS_OPEN,
            },
        ]
    }

    fn titles(items: &[Award]) -> Vec<&'static str> {
        items.iter().map(|a| a.title).collect()
    }

    #[test]
    fn default_sort_is_soonest_deadline() {
        let out = refine(&awards(), &ScholarshipFilter::default(), ScholarshipSort::default());
        assert_eq!(titles(&out), ["HEC Need-Based", "Fulbright", "Chevening"]);
    }

    #[test]
    fn status_and_field_filters() {
        let filter = ScholarshipFilter {
            field: Criterion::Only("engineering".into()),
            status: Criterion::Only("open".into()),
            ..Default::default()
        };
        let out = refine(&awards(), &filter, ScholarshipSort::Title);
        assert_eq!(titles(&out), ["HEC Need-Based"]);
    }

    #[test]
    fn search_covers_provider_and_description() {
        let by_provider = ScholarshipFilter {
            search: Criterion::from_search(Some("uk gov")),
            ..Default::default()
        };
        assert_eq!(titles(&refine(&awards(), &by_provider, ScholarshipSort::Title)), ["Chevening"]);

        let by_description = ScholarshipFilter {
            search: Criterion::from_search(Some("LIVING")),
            ..Default::default()
        };
        assert_eq!(refine(&awards(), &by_description, ScholarshipSort::Title).len(), 3);
    }

    #[test]
    fn type_and_level_filters() {
        let filter = ScholarshipFilter {
            scholarship_type: Criterion::Only("fully funded".into()),
            level: Criterion::Only("MASTERS".into()),
            ..Default::default()
        };
        let out = refine(&awards(), &filter, ScholarshipSort::Provider);
        assert_eq!(titles(&out), ["Chevening", "Fulbright"]);
    }

    #[test]
    fn sorts_are_idempotent() {
        for key in SORT_OPTIONS.iter().map(|(_, k)| *k) {
            let once = refine(&awards(), &ScholarshipFilter::default(), key);
            let twice = refine(&once, &ScholarshipFilter::default(), key);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn status_validation() {
        assert!(validate_status("open").is_ok());
        assert!(validate_status("closed").is_ok());
        assert!(validate_status("archived").is_err());
    }
}
