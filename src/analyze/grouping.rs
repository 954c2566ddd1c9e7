//! Grouped occurrence counts, keyed by the case-folded form.

use super::normalize::Normalizer;
use serde::Serialize;
use std::collections::BTreeMap;

/// One distinct value within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedObject {
    /// Trimmed, original-case text, fixed at the first occurrence of the key.
    pub display: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Mapping from case-folded key to grouped object.
///
/// A `BTreeMap` keeps iteration in ascending key order, which the statistics
/// aggregator relies on for its deterministic tie-breaks.
pub type GroupedMapping = BTreeMap<String, GroupedObject>;

/// Normalizes `span` and folds it into the mapping: first sight inserts with
/// count 1, later sights only increment. Rejected spans are ignored.
pub(super) fn fold_span(mapping: &mut GroupedMapping, normalizer: &Normalizer, span: &str) {
    if let Some((key, display)) = normalizer.normalize(span) {
        mapping
            .entry(key)
            .and_modify(|object| object.count += 1)
            .or_insert(GroupedObject { display, count: 1 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn normalizer() -> Normalizer {
        Normalizer::new(&Locale::parse("en_US").unwrap())
    }

    #[test]
    fn test_first_sight_fixes_display() {
        let n = normalizer();
        let mut mapping = GroupedMapping::new();
        fold_span(&mut mapping, &n, "Hi");
        fold_span(&mut mapping, &n, "hi");
        fold_span(&mut mapping, &n, "HI");

        assert_eq!(mapping.len(), 1);
        let object = &mapping["hi"];
        assert_eq!(object.display, "Hi");
        assert_eq!(object.count, 3);
    }

    #[test]
    fn test_rejected_spans_do_not_count() {
        let n = normalizer();
        let mut mapping = GroupedMapping::new();
        fold_span(&mut mapping, &n, ".");
        fold_span(&mut mapping, &n, " ");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_iteration_is_key_sorted() {
        let n = normalizer();
        let mut mapping = GroupedMapping::new();
        for span in ["to", "One", "zeta", "456"] {
            fold_span(&mut mapping, &n, span);
        }
        let keys: Vec<&String> = mapping.keys().collect();
        assert_eq!(keys, ["456", "one", "to", "zeta"]);
    }
}
