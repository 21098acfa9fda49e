//! `fo dashboard` — the full-screen terminal dashboard.

use clap::Args;
use folio_core::store;

use crate::output::{OutputMode, report_folio_error};
use crate::tui;

/// Arguments for `fo dashboard`.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {}

/// Execute `fo dashboard`.
///
/// The catalogue is fetched before the terminal is touched: a fetch or parse
/// failure reports a structured error and renders nothing — no partial UI,
/// no retry.
pub fn run_dashboard(
    _args: &DashboardArgs,
    output: OutputMode,
    source: &str,
) -> anyhow::Result<()> {
    let records = match store::load_records(source) {
        Ok(records) => records,
        Err(err) => return report_folio_error(output, &err),
    };

    tui::dashboard::run(&records, source.to_string())
}
