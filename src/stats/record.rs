//! The per-category statistics record.

use serde::Serialize;

/// Statistics for one category of one analyzed document.
///
/// Created by one aggregation pass and never mutated afterward. An empty
/// category has zero counts and `None` in all four extremum fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsRecord {
    /// Total number of occurrences.
    pub count: usize,
    /// Number of distinct case-folded values.
    pub unique: usize,
    /// Smallest value under the category's ordering relation.
    pub min_value: Option<String>,
    /// Largest value under the category's ordering relation.
    pub max_value: Option<String>,
    /// Sum of display-text character lengths over all occurrences.
    pub sum_length: usize,
    /// Shortest value by character length; first encountered wins ties.
    pub shortest_value: Option<String>,
    /// Longest value by character length; first encountered wins ties.
    pub longest_value: Option<String>,
}

impl StatsRecord {
    /// Average display length per occurrence, or `None` for an empty
    /// category.
    pub fn mean_length(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum_length as f64 / self.count as f64)
        }
    }
}
