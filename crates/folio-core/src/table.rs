//! Table model for the catalogue view.

use crate::collate::natural_cmp;
use crate::record::{FieldKey, ProjectRecord};

/// One column of the catalogue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: FieldKey,
    /// Fixed width in cells; `None` means the column flexes.
    pub width: Option<u16>,
    /// Lower bound for flexing columns.
    pub min_width: u16,
}

/// The seven catalogue columns, mapped 1:1 to the record fields.
#[must_use]
pub const fn columns() -> [Column; 7] {
    [
        Column {
            field: FieldKey::Name,
            width: None,
            min_width: 20,
        },
        Column {
            field: FieldKey::Period,
            width: Some(10),
            min_width: 10,
        },
        Column {
            field: FieldKey::Entity,
            width: Some(20),
            min_width: 20,
        },
        Column {
            field: FieldKey::Function,
            width: Some(15),
            min_width: 15,
        },
        Column {
            field: FieldKey::Monetization,
            width: Some(13),
            min_width: 13,
        },
        Column {
            field: FieldKey::Outputs,
            width: Some(20),
            min_width: 20,
        },
        Column {
            field: FieldKey::BusinessValue,
            width: None,
            min_width: 30,
        },
    ]
}

/// Initial table order: most recent period first.
///
/// The sort is stable, so records sharing a period keep their load order.
pub fn sort_by_period_desc(records: &mut [ProjectRecord]) {
    records.sort_by(|a, b| natural_cmp(&b.period, &a.period));
}
