// file: src/index/search.rs
// description: case-insensitive substring search over note topics
// reference: sort-then-scan topic lookup

use super::sort::merge_sort_by;
use crate::models::{Note, SortOrder};
use tracing::debug;

/// Notes whose topic contains `term`, ignoring case, ordered by topic.
///
/// An empty term matches nothing. Substring queries cannot use the topic
/// ordering to narrow the range, so every note is checked.
pub fn search_by_topic<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    search_candidates(notes.iter().collect(), term)
}

/// Topic search over an already selected set of note references.
pub(crate) fn search_candidates<'a>(candidates: Vec<&'a Note>, term: &str) -> Vec<&'a Note> {
    if term.is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    let total = candidates.len();
    let order = SortOrder::by_topic();
    let needle = term.to_lowercase();

    let matching: Vec<&Note> = merge_sort_by(&candidates, |a, b| order.compare(a, b))
        .into_iter()
        .filter(|note| note.topic.to_lowercase().contains(&needle))
        .collect();

    debug!(
        "Topic search '{}' matched {} of {} notes",
        term,
        matching.len(),
        total
    );
    matching
}
