//! Conjunctive equality filters over the catalogue.

use serde::Serialize;

use crate::collate::natural_cmp;
use crate::record::{FieldKey, ProjectRecord};

/// Fields exposed as filter controls, one selection control per field.
pub const FILTER_FIELDS: [FieldKey; 4] = [
    FieldKey::Period,
    FieldKey::Entity,
    FieldKey::Monetization,
    FieldKey::Outputs,
];

/// One exact-match equality predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub field: FieldKey,
    pub value: String,
}

/// A conjunction of equality predicates. The empty set matches every record.
///
/// Filtering is stateless between invocations: a set is always rebuilt in
/// full from the current control selections, never diffed incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    pub predicates: Vec<Predicate>,
}

impl FilterSet {
    /// Recompute the active set from current control selections.
    ///
    /// One predicate per control with a non-empty selection; control order
    /// is preserved.
    #[must_use]
    pub fn from_selections<'a, I>(selections: I) -> Self
    where
        I: IntoIterator<Item = (FieldKey, Option<&'a str>)>,
    {
        let predicates = selections
            .into_iter()
            .filter_map(|(field, selected)| {
                selected
                    .filter(|value| !value.is_empty())
                    .map(|value| Predicate {
                        field,
                        value: value.to_string(),
                    })
            })
            .collect();
        Self { predicates }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// True when the record satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.field.value(record) == predicate.value)
    }

    /// Apply the conjunction, keeping matching records in input order.
    #[must_use]
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Sorted distinct values of `field` across `records`, for filter options.
///
/// Sorted under the natural collation. Empty values are excluded: they would
/// collide with the implicit "no filter" default option.
#[must_use]
pub fn distinct_values(records: &[ProjectRecord], field: FieldKey) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|record| field.value(record))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    values.sort_by(|a, b| natural_cmp(a, b));
    values.dedup();
    values
}
