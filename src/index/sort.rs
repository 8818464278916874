// file: src/index/sort.rs
// description: stable top-down merge sort over note keys
// reference: classic top-down merge sort, ties taken from the left run

use crate::models::{Note, SortOrder};
use std::cmp::Ordering;
use tracing::debug;

/// Returns a sorted copy of `items`; the input slice is left untouched.
///
/// O(n log n) comparisons with O(n) scratch per merge level. Equal elements
/// keep their input order.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(items, &mut compare)
}

fn sort_run<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_run(&items[..mid], compare);
    let right = sort_run(&items[mid..], compare);

    merge(&left, &right, compare)
}

fn merge<T, F>(left: &[T], right: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // left on ties keeps the sort stable
        if compare(&left[i], &right[j]).is_le() {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Orders `notes` by the successive keys of `order`.
pub fn sort_notes<'a>(notes: &'a [Note], order: &SortOrder) -> Vec<&'a Note> {
    let refs: Vec<&Note> = notes.iter().collect();
    let sorted = merge_sort_by(&refs, |a, b| order.compare(a, b));

    debug!("Sorted {} notes by {}", sorted.len(), order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::test_support::{generate_notes, is_permutation};
    use crate::models::SortKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accented_keys_sort_with_base_letter() {
        let notes = vec![
            Note::new("core", 2, "Physique", "Zebra crossing"),
            Note::new("core", 2, "Física", "Évaluation"),
            Note::new("core", 2, "Électronique", "apple"),
        ];

        let by_topic = sort_notes(&notes, &SortOrder::by_topic());
        let topics: Vec<&str> = by_topic.iter().map(|n| n.topic.as_str()).collect();
        assert_eq!(topics, vec!["apple", "Évaluation", "Zebra crossing"]);

        let canonical = sort_notes(&notes, &SortOrder::canonical());
        let subjects: Vec<&str> = canonical.iter().map(|n| n.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Électronique", "Física", "Physique"]);
    }

    #[test]
    fn test_merge_sort_small_inputs() {
        let empty: [i32; 0] = [];
        assert!(merge_sort_by(&empty, |a, b| a.cmp(b)).is_empty());
        assert_eq!(merge_sort_by(&[7], |a, b| a.cmp(b)), vec![7]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        let sorted = merge_sort_by(&pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            sorted,
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn test_merge_sort_leaves_input_untouched() {
        let input = [5, 3, 9, 1];
        let sorted = merge_sort_by(&input, |a, b| a.cmp(b));
        assert_eq!(input, [5, 3, 9, 1]);
        assert_eq!(sorted, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_default_order_scenario() {
        let notes = vec![
            Note::new("aiml", 3, "ML", "Gradient Descent"),
            Note::new("core", 1, "Java", "Loops"),
        ];

        let sorted = sort_notes(&notes, &SortOrder::canonical());
        let labels: Vec<String> = sorted.iter().map(|n| n.location()).collect();
        assert_eq!(labels, vec!["aiml/3/ML", "core/1/Java"]);
    }

    #[test]
    fn test_sorted_output_is_ordered_permutation() {
        let notes = generate_notes(200, 7);
        let order = SortOrder::canonical();
        let sorted = sort_notes(&notes, &order);

        assert!(is_permutation(&notes, &sorted));
        for pair in sorted.windows(2) {
            assert!(order.compare(pair[0], pair[1]).is_le());
        }
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let notes = generate_notes(120, 11);
        let order = SortOrder::canonical();

        let once: Vec<Note> = sort_notes(&notes, &order).into_iter().cloned().collect();
        let twice: Vec<Note> = sort_notes(&once, &order).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_final_ties_keep_input_order() {
        let notes = vec![
            Note::new("core", 1, "Java", "first").with_id("1"),
            Note::new("aiml", 1, "AI", "other").with_id("2"),
            Note::new("core", 1, "Java", "second").with_id("3"),
            Note::new("core", 1, "Java", "third").with_id("4"),
        ];

        let sorted = sort_notes(&notes, &SortOrder::canonical());
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_custom_key_sequence() {
        let notes = vec![
            Note::new("core", 2, "Java", "b"),
            Note::new("aiml", 1, "ML", "a"),
            Note::new("cyber", 1, "Crypto", "c"),
        ];

        let order = SortOrder::new(vec![SortKey::Semester, SortKey::Department]).unwrap();
        let sorted = sort_notes(&notes, &order);
        let labels: Vec<String> = sorted.iter().map(|n| n.location()).collect();
        assert_eq!(labels, vec!["aiml/1/ML", "cyber/1/Crypto", "core/2/Java"]);
    }
}
