//! `fo summary` — headline catalogue statistics.

use std::io::Write;

use clap::Args;
use folio_core::store;
use folio_core::summary::{self, Summary};

use crate::output::{OutputMode, render, report_folio_error};

/// Arguments for `fo summary`.
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {}

/// Execute `fo summary`.
pub fn run_summary(_args: &SummaryArgs, output: OutputMode, source: &str) -> anyhow::Result<()> {
    let records = match store::load_records(source) {
        Ok(records) => records,
        Err(err) => return report_folio_error(output, &err),
    };

    let payload = summary::summarize(&records);
    render(output, &payload, |summary, w| {
        render_summary_human(summary, w)
    })
}

fn render_summary_human(summary: &Summary, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Catalogue summary")?;
    writeln!(w, "  projects:       {}", summary.total)?;
    writeln!(w, "  paid:           {}%", summary.paid_pct)?;
    writeln!(w, "  value realized: {}%", summary.valuable_pct)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_summary_human;
    use folio_core::summary::Summary;

    #[test]
    fn human_rendering_includes_all_three_statistics() {
        let summary = Summary {
            total: 12,
            paid_pct: 50,
            valuable_pct: 25,
        };
        let mut out = Vec::new();
        render_summary_human(&summary, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("projects:       12"));
        assert!(rendered.contains("paid:           50%"));
        assert!(rendered.contains("value realized: 25%"));
    }
}
