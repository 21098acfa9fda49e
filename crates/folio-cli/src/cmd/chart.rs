//! `fo chart` — print one chart dataset.
//!
//! JSON mode emits the chart spec verbatim for external rendering
//! collaborators; pretty mode draws unicode bars.

use std::io::Write;

use clap::{Args, ValueEnum};
use folio_core::aggregate::Aggregation;
use folio_core::chart::{self, TreemapSpec};
use folio_core::record::FieldKey;
use folio_core::store;
use serde::Serialize;

use crate::output::{OutputMode, render, report_folio_error};

/// Which chart dataset to build.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Projects per period (line, ascending natural order).
    Period,
    /// Projects per entity (ranked horizontal bars).
    Entity,
    /// Projects per function (ranked horizontal bars).
    Function,
    /// Paid vs portfolio split (donut).
    Monetization,
    /// Output kinds (weighted treemap).
    Outputs,
}

/// Arguments for `fo chart`.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Chart dataset to build.
    #[arg(value_enum)]
    pub kind: ChartKind,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ChartPayload {
    Line(chart::LineChartSpec),
    Bar(chart::BarChartSpec),
    Donut(chart::DonutSpec),
    Treemap(chart::TreemapSpec),
}

/// Execute `fo chart`.
pub fn run_chart(args: &ChartArgs, output: OutputMode, source: &str) -> anyhow::Result<()> {
    let records = match store::load_records(source) {
        Ok(records) => records,
        Err(err) => return report_folio_error(output, &err),
    };

    let payload = match args.kind {
        ChartKind::Period => ChartPayload::Line(chart::line_chart(&records)),
        ChartKind::Entity => ChartPayload::Bar(chart::bar_chart(&records, FieldKey::Entity)),
        ChartKind::Function => ChartPayload::Bar(chart::bar_chart(&records, FieldKey::Function)),
        ChartKind::Monetization => ChartPayload::Donut(chart::donut_chart(&records)),
        ChartKind::Outputs => ChartPayload::Treemap(chart::treemap_chart(&records)),
    };

    render(output, &payload, |payload, w| {
        render_chart_human(payload, w)
    })
}

fn render_chart_human(payload: &ChartPayload, w: &mut dyn Write) -> std::io::Result<()> {
    match payload {
        ChartPayload::Line(spec) => render_bars_human(spec.series_name, &spec.data, w),
        ChartPayload::Bar(spec) => render_bars_human(&spec.title, &spec.data, w),
        ChartPayload::Donut(spec) => render_bars_human("Monetization", &spec.data, w),
        ChartPayload::Treemap(spec) => render_treemap_human(spec, w),
    }
}

/// Width of the widest unicode bar.
const BAR_WIDTH: u64 = 24;

fn render_bars_human(title: &str, data: &Aggregation, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{title}")?;
    if data.is_empty() {
        return writeln!(w, "  (no records)");
    }

    let max = data.max_value().max(1);
    for (label, value) in data.entries() {
        let filled = usize::try_from(value * BAR_WIDTH / max).unwrap_or_default();
        let bar = "█".repeat(filled.max(usize::from(value > 0)));
        let count = chart::data_label(value).unwrap_or_default();
        writeln!(w, "  {label:<24} {bar} {count}")?;
    }
    Ok(())
}

fn render_treemap_human(spec: &TreemapSpec, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Outputs")?;
    if spec.leaves.is_empty() {
        return writeln!(w, "  (no records)");
    }

    for leaf in &spec.leaves {
        let count = chart::data_label(leaf.weight).unwrap_or_default();
        writeln!(w, "  {:<24} {:<6} {}", leaf.group, count, leaf.color.css())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ChartPayload, render_chart_human};
    use folio_core::chart;
    use folio_core::record::{FieldKey, ProjectRecord};

    fn catalogue() -> Vec<ProjectRecord> {
        ["Studio", "Studio", "Freelance"]
            .into_iter()
            .map(|entity| ProjectRecord {
                name: "Project".into(),
                period: "2023".into(),
                entity: entity.into(),
                outputs: "Web App".into(),
                ..ProjectRecord::default()
            })
            .collect()
    }

    #[test]
    fn bar_rendering_is_ranked() {
        let payload = ChartPayload::Bar(chart::bar_chart(&catalogue(), FieldKey::Entity));
        let mut out = Vec::new();
        render_chart_human(&payload, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        let studio = rendered.find("Studio").expect("studio row");
        let freelance = rendered.find("Freelance").expect("freelance row");
        assert!(studio < freelance, "larger entity renders first");
        assert!(rendered.contains('█'));
    }

    #[test]
    fn empty_chart_renders_placeholder() {
        let payload = ChartPayload::Line(chart::line_chart(&[]));
        let mut out = Vec::new();
        render_chart_human(&payload, &mut out).expect("render");
        assert!(String::from_utf8(out).expect("utf8").contains("(no records)"));
    }

    #[test]
    fn treemap_rendering_lists_css_colors() {
        let payload = ChartPayload::Treemap(chart::treemap_chart(&catalogue()));
        let mut out = Vec::new();
        render_chart_human(&payload, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("Web App"));
        assert!(rendered.contains("rgba("));
    }
}
