//! Headline statistics for the summary tiles.

use serde::Serialize;

use crate::record::ProjectRecord;

/// Monetization value counted as a paid engagement.
pub const PAID: &str = "Paid";

/// The three scalar statistics shown above the fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub paid_pct: u32,
    pub valuable_pct: u32,
}

/// Derive the summary statistics from the record list.
///
/// An empty dataset reports 0% for both percentages rather than propagating
/// a division by zero.
#[must_use]
pub fn summarize(records: &[ProjectRecord]) -> Summary {
    let total = records.len();
    if total == 0 {
        return Summary::default();
    }

    let paid = records
        .iter()
        .filter(|record| record.monetization == PAID)
        .count();
    let valuable = records
        .iter()
        .filter(|record| !record.business_value.trim().is_empty())
        .count();

    Summary {
        total,
        paid_pct: percent(paid, total),
        valuable_pct: percent(valuable, total),
    }
}

/// Round-to-nearest integer percentage of `part` in `total`.
fn percent(part: usize, total: usize) -> u32 {
    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / total as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (ratio * 100.0).round() as u32
    }
}
