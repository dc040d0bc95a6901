//! # Eligibility Module
//!
//! The prerequisite-satisfaction filter over a loaded catalog.
//!
//! A course is eligible for a student when every prerequisite code is in
//! the student's completed set, the course itself has not already been
//! completed, and — when a category restriction is active — the course's
//! category matches it exactly.
//!
//! Pure functions over their inputs: no I/O, no side effects, stable
//! catalog order in, stable order out.

use crate::catalog::Course;
use std::collections::BTreeSet;

// =============================================================================
// ELIGIBILITY PREDICATE
// =============================================================================

/// Check a single course against a completed set and optional category.
///
/// The category restriction only applies when `category` is `Some` and
/// non-empty; an empty string means no restriction. Matching is exact,
/// no case-folding, so a `None` course category never matches an active
/// restriction.
#[must_use]
pub fn is_eligible(course: &Course, completed: &BTreeSet<String>, category: Option<&str>) -> bool {
    let prereqs_met = course.prerequisites.iter().all(|p| completed.contains(p));
    let already_completed = completed.contains(&course.code);
    let category_ok = match category {
        Some(c) if !c.is_empty() => course.category.as_deref() == Some(c),
        _ => true,
    };

    prereqs_met && !already_completed && category_ok
}

// =============================================================================
// CATALOG FILTER
// =============================================================================

/// Filter a catalog down to the courses the student can take now.
///
/// Iterates the catalog in its given order and keeps every course for
/// which [`is_eligible`] holds. Already-completed courses are excluded
/// even when their prerequisites are satisfied.
#[must_use]
pub fn eligible_courses(
    completed: &BTreeSet<String>,
    catalog: Vec<Course>,
    category: Option<&str>,
) -> Vec<Course> {
    catalog
        .into_iter()
        .filter(|course| is_eligible(course, completed, category))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| (*c).to_string()).collect()
    }

    /// The two-course chain: A has no prerequisites, B needs A.
    fn chain_catalog() -> Vec<Course> {
        vec![
            Course::new("A"),
            Course::new("B").with_prerequisites(["A"]),
        ]
    }

    #[test]
    fn empty_prerequisites_are_vacuously_satisfied() {
        let catalog = chain_catalog();
        let result = eligible_courses(&completed(&[]), catalog, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "A");
    }

    #[test]
    fn completing_a_prerequisite_unlocks_its_dependents() {
        let catalog = chain_catalog();
        let result = eligible_courses(&completed(&["A"]), catalog, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "B");
    }

    #[test]
    fn fully_completed_chain_yields_nothing() {
        let catalog = chain_catalog();
        let result = eligible_courses(&completed(&["A", "B"]), catalog, None);
        assert!(result.is_empty());
    }

    #[test]
    fn missing_prerequisite_excludes_course() {
        let catalog = vec![Course::new("C").with_prerequisites(["A", "B"])];
        let result = eligible_courses(&completed(&["A"]), catalog, None);
        assert!(result.is_empty());
    }

    #[test]
    fn completed_course_never_returned() {
        // Prerequisites satisfied, but the course itself is already done.
        let catalog = vec![Course::new("A")];
        let result = eligible_courses(&completed(&["A"]), catalog, None);
        assert!(result.is_empty());
    }

    #[test]
    fn category_filter_is_exact_match() {
        let catalog = vec![
            Course::new("A").with_category("core"),
            Course::new("B").with_category("elective"),
        ];
        let result = eligible_courses(&completed(&[]), catalog, Some("core"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "A");
    }

    #[test]
    fn category_filter_does_not_case_fold() {
        let catalog = vec![Course::new("A").with_category("Core")];
        let result = eligible_courses(&completed(&[]), catalog, Some("core"));
        assert!(result.is_empty());
    }

    #[test]
    fn empty_category_means_no_restriction() {
        let catalog = vec![
            Course::new("A").with_category("core"),
            Course::new("B").with_category("elective"),
        ];
        let result = eligible_courses(&completed(&[]), catalog, Some(""));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn uncategorized_course_fails_an_active_restriction() {
        let catalog = vec![Course::new("A")];
        let result = eligible_courses(&completed(&[]), catalog, Some("core"));
        assert!(result.is_empty());
    }

    #[test]
    fn catalog_order_is_preserved() {
        let catalog = vec![Course::new("Z"), Course::new("M"), Course::new("A")];
        let result = eligible_courses(&completed(&[]), catalog, None);
        let codes: Vec<&str> = result.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["Z", "M", "A"]);
    }

    #[test]
    fn duplicate_completed_codes_are_harmless() {
        // The completed sequence is treated as a membership set.
        let set: BTreeSet<String> = ["A", "A", "A"].iter().map(|c| (*c).to_string()).collect();
        let catalog = vec![Course::new("B").with_prerequisites(["A"])];
        let result = eligible_courses(&set, catalog, None);
        assert_eq!(result.len(), 1);
    }
}
