// file: src/utils/collation.rs
// description: locale-aware string collation for note keys
// reference: https://docs.rs/feruca (Unicode Collation Algorithm, CLDR root)

use feruca::Collator;
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    // the collator keeps internal caches and needs `&mut self`
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Dictionary order under the CLDR root collation.
///
/// Accented letters sort with their base letter (`"Évaluation" < "Zebra"`),
/// lowercase sorts before uppercase when that is the only difference, and
/// only identical strings compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    COLLATOR
        .with(|collator| collator.borrow_mut().collate(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collate_dictionary_order() {
        let mut words = vec!["Banana", "cherry", "apple", "banana", "Apple"];
        words.sort_by(|a, b| collate(a, b));
        assert_eq!(words, vec!["apple", "Apple", "banana", "Banana", "cherry"]);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let mut topics = vec!["Zebra crossing", "Évaluation", "apple"];
        topics.sort_by(|a, b| collate(a, b));
        assert_eq!(topics, vec!["apple", "Évaluation", "Zebra crossing"]);

        assert_eq!(collate("Électronique", "Física"), Ordering::Less);
        assert_eq!(collate("Régression", "Rome"), Ordering::Less);
    }

    #[test]
    fn test_collate_equal_only_when_identical() {
        assert_eq!(collate("ML", "ML"), Ordering::Equal);
        assert_ne!(collate("ml", "ML"), Ordering::Equal);
        assert_ne!(collate("core", "Core"), Ordering::Equal);
        assert_eq!(collate("aiml", "core"), Ordering::Less);
        assert_eq!(collate("", "a"), Ordering::Less);
    }

    #[test]
    fn test_collate_is_antisymmetric() {
        let words = ["Évaluation", "evaluation", "Evaluation", "éval", "Zebra", "zebra"];
        for a in words {
            for b in words {
                assert_eq!(collate(a, b), collate(b, a).reverse());
            }
        }
    }
}
