// file: src/index/filter.rs
// description: exact-match note filter narrowed by binary search on department
// reference: binary search with left/right run expansion

use super::sort::sort_notes;
use crate::models::{FilterCriteria, Note, SortOrder};
use crate::utils::collation::collate;
use std::cmp::Ordering;
use tracing::debug;

/// Index of *some* element for which `compare` returns `Equal`.
///
/// `compare` reports how an element orders relative to the target, and `items`
/// must be sorted consistently with it. Which of several equal elements is
/// found is unspecified.
pub fn binary_search_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match compare(&items[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

/// Notes matching every field set in `criteria`, in canonical order.
pub fn filter_notes<'a>(notes: &'a [Note], criteria: &FilterCriteria) -> Vec<&'a Note> {
    let sorted = sort_notes(notes, &SortOrder::canonical());

    if criteria.is_empty() {
        return sorted;
    }

    let matching: Vec<&Note> = match criteria.department.as_deref() {
        Some(department) => department_run(&sorted, department)
            .iter()
            .copied()
            .filter(|note| criteria.matches(note))
            .collect(),
        // Without a department the sort offers nothing to narrow on.
        None => sorted
            .into_iter()
            .filter(|note| criteria.matches(note))
            .collect(),
    };

    debug!(
        "Filter {:?} matched {} of {} notes",
        criteria,
        matching.len(),
        notes.len()
    );
    matching
}

/// The contiguous run of `department` in a department-sorted slice.
fn department_run<'s, 'a>(sorted: &'s [&'a Note], department: &str) -> &'s [&'a Note] {
    let Some(pivot) = binary_search_by(sorted, |note| collate(&note.department, department))
    else {
        return &[];
    };

    let mut start = pivot;
    while start > 0 && sorted[start - 1].department == department {
        start -= 1;
    }

    let mut end = pivot + 1;
    while end < sorted.len() && sorted[end].department == department {
        end += 1;
    }

    &sorted[start..end]
}
