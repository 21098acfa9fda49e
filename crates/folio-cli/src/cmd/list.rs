//! `fo list` — catalogue records with conjunctive filters.

use std::io::Write;

use clap::Args;
use folio_core::filter::FilterSet;
use folio_core::record::{FieldKey, ProjectRecord};
use folio_core::store;
use folio_core::table::{self, Column};

use crate::output::{OutputMode, render, report_folio_error};

/// Arguments for `fo list`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by period (exact match).
    #[arg(long)]
    pub period: Option<String>,

    /// Filter by entity (exact match).
    #[arg(long)]
    pub entity: Option<String>,

    /// Filter by monetization (exact match).
    #[arg(long)]
    pub monetization: Option<String>,

    /// Filter by outputs (exact match).
    #[arg(long)]
    pub outputs: Option<String>,

    /// Maximum rows to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

impl ListArgs {
    /// Recompute the full filter set from the flag values.
    fn filter_set(&self) -> FilterSet {
        FilterSet::from_selections([
            (FieldKey::Period, self.period.as_deref()),
            (FieldKey::Entity, self.entity.as_deref()),
            (FieldKey::Monetization, self.monetization.as_deref()),
            (FieldKey::Outputs, self.outputs.as_deref()),
        ])
    }
}

/// Execute `fo list`.
pub fn run_list(args: &ListArgs, output: OutputMode, source: &str) -> anyhow::Result<()> {
    let records = match store::load_records(source) {
        Ok(records) => records,
        Err(err) => return report_folio_error(output, &err),
    };

    let mut rows = args.filter_set().apply(&records);
    table::sort_by_period_desc(&mut rows);
    rows.truncate(args.limit);

    render(output, &rows, |rows, w| render_rows_human(rows, w))
}

fn column_width(column: &Column) -> usize {
    column.width.map_or(usize::from(column.min_width), usize::from)
}

/// Truncate to `width` display characters, marking the cut with `…`.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn render_rows_human(rows: &[ProjectRecord], w: &mut dyn Write) -> std::io::Result<()> {
    if rows.is_empty() {
        return writeln!(w, "No records match the active filters");
    }

    let columns = table::columns();
    let header: Vec<String> = columns
        .iter()
        .map(|column| format!("{:<w$}", column.field.as_str(), w = column_width(column)))
        .collect();
    writeln!(w, "{}", header.join("  "))?;

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                let width = column_width(column);
                format!("{:<w$}", clip(column.field.value(row), width), w = width)
            })
            .collect();
        writeln!(w, "{}", cells.join("  "))?;
    }
    Ok(())
}
