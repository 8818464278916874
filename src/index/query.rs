// file: src/index/query.rs
// description: dashboard query combining the exact-match filter with topic search
// reference: filter first, then topic search over the surviving notes

use super::filter::filter_notes;
use super::search::search_candidates;
use crate::models::{FilterCriteria, Note};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteQuery {
    pub criteria: FilterCriteria,
    pub search: Option<String>,
}

impl NoteQuery {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            search: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

/// Filters, then narrows by topic when a search term is set.
///
/// A cleared search box falls back to the filtered list in canonical order;
/// with a term the result is ordered by topic.
pub fn run_query<'a>(notes: &'a [Note], query: &NoteQuery) -> Vec<&'a Note> {
    let filtered = filter_notes(notes, &query.criteria);

    let Some(term) = query.search_term() else {
        return filtered;
    };

    let hits = search_candidates(filtered, term);
    debug!("Query matched {} notes", hits.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::test_support::sample_notes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_without_search_is_filter() {
        let notes = sample_notes();
        let query = NoteQuery::new(FilterCriteria::new().department("core"));

        let result = run_query(&notes, &query);
        let labels: Vec<String> = result.iter().map(|n| n.location()).collect();
        assert_eq!(labels, vec!["core/1/C", "core/1/Java", "core/2/DS"]);
    }

    #[test]
    fn test_cleared_search_falls_back_to_filter() {
        let notes = sample_notes();
        let query = NoteQuery::new(FilterCriteria::new().semester(1)).with_search("");
        assert_eq!(run_query(&notes, &query).len(), 3);
    }

    #[test]
    fn test_query_search_within_filter() {
        let notes = sample_notes();
        let query = NoteQuery::new(FilterCriteria::new().department("core")).with_search("l");

        let result = run_query(&notes, &query);
        let topics: Vec<&str> = result.iter().map(|n| n.topic.as_str()).collect();
        assert_eq!(topics, vec!["Linked Lists", "Loops"]);
    }

    #[test]
    fn test_query_returns_caller_records() {
        let notes = sample_notes();
        let query = NoteQuery::default().with_search("descent");

        let result = run_query(&notes, &query);
        assert_eq!(result.len(), 1);
        assert!(notes.iter().any(|n| std::ptr::eq(n, result[0])));
    }
}
