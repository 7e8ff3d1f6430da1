//! In-memory listing engine shared by the university, ambassador and
//! scholarship views.
//!
//! A listing request fetches one page of a collection, then narrows it with a
//! [`Filter`] (a conjunction of independent clauses) and orders it with a
//! [`SortKey`]. Both stages are pure: the input slice is never mutated and the
//! output is a fresh vector.
//!
//! Entity-specific criteria live in the submodules. Each one defines a record
//! trait so the engine can run over database rows or test fixtures alike.

pub mod ambassadors;
pub mod scholarships;
pub mod universities;

use std::cmp::Ordering;

use crate::error::CoreError;
use crate::search::normalize_needle;

/// Query-string sentinel meaning "no constraint".
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Criterion
// ---------------------------------------------------------------------------

/// A single filter clause value: either unconstrained or a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion<T> {
    All,
    Only(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::All
    }
}

impl<T> Criterion<T> {
    /// `true` when unconstrained, otherwise the result of `pred` on the value.
    pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(value) => pred(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Criterion::All)
    }
}

impl Criterion<String> {
    /// Build a category clause from a query parameter.
    ///
    /// Absent, blank, and `"all"` (any casing) are unconstrained.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => Criterion::All,
            Some(v) if v.eq_ignore_ascii_case(ALL) => Criterion::All,
            Some(v) => Criterion::Only(v.to_string()),
        }
    }

    /// Build a text-search clause. The stored needle is lowercased; only blank
    /// input is unconstrained so that searching for the word "all" still works.
    pub fn from_search(query: Option<&str>) -> Self {
        match query.and_then(normalize_needle) {
            Some(needle) => Criterion::Only(needle),
            None => Criterion::All,
        }
    }
}

impl<T: Copy> Criterion<T> {
    /// Build a numeric threshold clause from an optional query parameter.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Criterion::Only(v),
            None => Criterion::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A conjunction of clauses over items of type `T`.
///
/// Implementations evaluate every clause for every item; no clause
/// short-circuits another.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// One of a fixed set of total orders over items of type `T`.
pub trait SortKey<T>: Copy {
    fn compare(self, a: &T, b: &T) -> Ordering;
}

/// Filter then sort `items`, returning the visible subset in display order.
///
/// The sort is stable, so ties keep their fetch order.
pub fn refine<T, F, S>(items: &[T], filter: &F, sort: S) -> Vec<T>
where
    T: Clone,
    F: Filter<T>,
    S: SortKey<T>,
{
    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Catalog ratings are on a 0-5 scale.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating {rating} is out of range. Must be between 0 and 5"
        )))
    }
}

/// Every clause is evaluated before combining.
pub(crate) fn all_of<const N: usize>(clauses: [bool; N]) -> bool {
    clauses.iter().all(|c| *c)
}

/// Descending comparison for ratings in the 0-5 range.
pub(crate) fn desc_f64(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Parse a sort key from a query parameter, falling back to `default` when absent.
pub(crate) fn parse_sort<S>(
    raw: Option<&str>,
    default: S,
    options: &[(&str, S)],
) -> Result<S, CoreError>
where
    S: Copy,
{
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(default);
    };
    options
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(raw))
        .map(|(_, key)| *key)
        .ok_or_else(|| {
            let names: Vec<&str> = options.iter().map(|(name, _)| *name).collect();
            CoreError::Validation(format!(
                "Invalid sort '{raw}'. Must be one of: {}",
                names.join(", ")
            ))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_sentinel_params_are_unconstrained() {
        assert!(Criterion::from_param(None).is_all());
        assert!(Criterion::from_param(Some("")).is_all());
        assert!(Criterion::from_param(Some("all")).is_all());
        assert!(Criterion::from_param(Some("ALL")).is_all());
    }

    #[test]
    fn concrete_param_is_kept_verbatim() {
        assert_eq!(
            Criterion::from_param(Some(" Lahore ")),
            Criterion::Only("Lahore".to_string())
        );
    }

    #[test]
    fn search_is_lowercased_and_all_is_a_real_word() {
        assert_eq!(
            Criterion::from_search(Some("LUMS")),
            Criterion::Only("lums".to_string())
        );
        assert_eq!(
            Criterion::from_search(Some("all")),
            Criterion::Only("all".to_string())
        );
        assert!(Criterion::from_search(Some("  ")).is_all());
    }

    #[test]
    fn unconstrained_admits_everything() {
        let c: Criterion<f64> = Criterion::All;
        assert!(c.admits(|_| false));
    }

    #[test]
    fn all_of_requires_every_clause() {
        assert!(all_of([true, true, true]));
        assert!(!all_of([true, false, true]));
        assert!(all_of([]));
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Dummy {
        A,
        B,
    }

    #[test]
    fn parse_sort_defaults_and_rejects_unknown() {
        let options = [("a", Dummy::A), ("b", Dummy::B)];
        assert_eq!(parse_sort(None, Dummy::A, &options).unwrap(), Dummy::A);
        assert_eq!(parse_sort(Some("B"), Dummy::A, &options).unwrap(), Dummy::B);
        let err = parse_sort(Some("zzz"), Dummy::A, &options).unwrap_err();
        assert!(err.to_string().contains("Must be one of: a, b"));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.01).is_err());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }
}
