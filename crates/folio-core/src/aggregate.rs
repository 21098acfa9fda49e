//! Grouping records into labeled frequency counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::collate::natural_cmp;
use crate::record::{FieldKey, ProjectRecord};

/// Labeled frequency counts for one record field.
///
/// `labels` and `values` are index-aligned. Labels are unique; for any field
/// where every record carries a value, the values sum to the record count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl Aggregation {
    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate index-aligned `(label, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Largest single count, or 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Group `records` by the string value of `field` and count occurrences per
/// distinct value.
///
/// The result is sorted ascending by label under the natural collation.
/// Empty input yields empty sequences; the input is never mutated.
#[must_use]
pub fn aggregate(records: &[ProjectRecord], field: FieldKey) -> Aggregation {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *counts.entry(field.value(record)).or_insert(0) += 1;
    }

    let mut entries: Vec<(&str, u64)> = counts.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| natural_cmp(a, b));

    Aggregation {
        labels: entries.iter().map(|&(label, _)| label.to_string()).collect(),
        values: entries.iter().map(|&(_, count)| count).collect(),
    }
}

/// Re-sort an aggregation descending by count, for ranked bar charts.
///
/// The sort is stable: ties keep their post-aggregation relative order.
#[must_use]
pub fn rank_descending(agg: &Aggregation) -> Aggregation {
    let mut entries: Vec<(&str, u64)> = agg.entries().collect();
    entries.sort_by(|&(_, a), &(_, b)| b.cmp(&a));

    Aggregation {
        labels: entries.iter().map(|&(label, _)| label.to_string()).collect(),
        values: entries.iter().map(|&(_, count)| count).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Aggregation, aggregate, rank_descending};
    use crate::record::{FieldKey, ProjectRecord};

    fn record(period: &str, entity: &str) -> ProjectRecord {
        ProjectRecord {
            name: format!("{entity} {period}"),
            period: period.into(),
            entity: entity.into(),
            function: "Engineering".into(),
            monetization: "Paid".into(),
            outputs: "Web App".into(),
            business_value: String::new(),
        }
    }

    #[test]
    fn counts_per_distinct_value() {
        let records = vec![
            record("Q1 2024", "Studio"),
            record("Q1 2024", "Freelance"),
            record("Q2 2024", "Studio"),
        ];
        let agg = aggregate(&records, FieldKey::Period);
        assert_eq!(agg.labels, vec!["Q1 2024", "Q2 2024"]);
        assert_eq!(agg.values, vec![2, 1]);
    }

    #[test]
    fn labels_sort_naturally() {
        let records = vec![
            record("Q10", "a"),
            record("Q2", "b"),
            record("Q1", "c"),
        ];
        let agg = aggregate(&records, FieldKey::Period);
        assert_eq!(agg.labels, vec!["Q1", "Q2", "Q10"]);
    }

    #[test]
    fn values_sum_to_record_count() {
        let records: Vec<ProjectRecord> = (0..7)
            .map(|i| record(&format!("Q{} 2023", i % 3 + 1), "Studio"))
            .collect();
        let agg = aggregate(&records, FieldKey::Period);
        assert_eq!(agg.values.iter().sum::<u64>(), 7);
    }

    #[test]
    fn empty_input_yields_empty_sequences() {
        let agg = aggregate(&[], FieldKey::Entity);
        assert!(agg.is_empty());
        assert!(agg.labels.is_empty());
        assert!(agg.values.is_empty());
    }

    #[test]
    fn aggregate_is_deterministic() {
        let records = vec![
            record("Q1 2024", "Studio"),
            record("Q3 2023", "Freelance"),
            record("Q1 2024", "Studio"),
        ];
        let first = aggregate(&records, FieldKey::Entity);
        let second = aggregate(&records, FieldKey::Entity);
        assert_eq!(first, second);
    }

    #[test]
    fn rank_descending_orders_by_count() {
        let agg = Aggregation {
            labels: vec!["A".into(), "B".into(), "C".into()],
            values: vec![3, 7, 1],
        };
        let ranked = rank_descending(&agg);
        assert_eq!(ranked.labels, vec!["B", "A", "C"]);
        assert_eq!(ranked.values, vec![7, 3, 1]);
    }

    #[test]
    fn rank_descending_keeps_tie_order() {
        let agg = Aggregation {
            labels: vec!["Design".into(), "Engineering".into(), "Research".into()],
            values: vec![2, 5, 2],
        };
        let ranked = rank_descending(&agg);
        // Design and Research tie at 2 and keep their aggregation order.
        assert_eq!(ranked.labels, vec!["Engineering", "Design", "Research"]);
    }

    #[test]
    fn max_value_of_empty_is_zero() {
        assert_eq!(Aggregation::default().max_value(), 0);
    }
}
