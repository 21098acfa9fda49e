//! Chart dataset builders.
//!
//! Each builder is a one-shot pure function: it aggregates the records for
//! its field, shapes the result for one chart type, and returns a
//! serializable spec for a rendering collaborator. Builders hold no state,
//! and no rendering surface is reused — the orchestrator invokes each
//! builder exactly once per load.

use serde::Serialize;

use crate::aggregate::{self, Aggregation};
use crate::palette::{self, Rgba};
use crate::record::{FieldKey, ProjectRecord};

/// Series name shown in the line chart legend.
pub const PROJECT_SERIES: &str = "# of Projects";

/// Single-series line chart over ascending periods.
#[derive(Debug, Clone, Serialize)]
pub struct LineChartSpec {
    pub series_name: &'static str,
    pub data: Aggregation,
    pub stroke: Rgba,
    pub fill: Rgba,
}

/// Ranked bar chart with one generated color per bar.
#[derive(Debug, Clone, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub field: FieldKey,
    /// Bars run horizontally (the original's `indexAxis: 'y'`).
    pub horizontal: bool,
    pub data: Aggregation,
    pub colors: Vec<Rgba>,
}

/// Donut over monetization classes with the fixed two-color palette.
#[derive(Debug, Clone, Serialize)]
pub struct DonutSpec {
    pub data: Aggregation,
    /// Slice colors, index-aligned with labels. The fixed palette cycles
    /// past two labels instead of panicking.
    pub colors: Vec<Rgba>,
}

/// One weighted treemap tile.
#[derive(Debug, Clone, Serialize)]
pub struct TreemapLeaf {
    pub group: String,
    pub weight: u64,
    pub color: Rgba,
}

/// Weighted tiling over output kinds.
#[derive(Debug, Clone, Serialize)]
pub struct TreemapSpec {
    pub leaves: Vec<TreemapLeaf>,
}

/// Build the Period line chart: ascending natural order, single series.
#[must_use]
pub fn line_chart(records: &[ProjectRecord]) -> LineChartSpec {
    LineChartSpec {
        series_name: PROJECT_SERIES,
        data: aggregate::aggregate(records, FieldKey::Period),
        stroke: palette::ACCENT,
        fill: palette::ACCENT_FILL,
    }
}

/// Build a ranked horizontal bar chart for `field` (Entity or Function).
#[must_use]
pub fn bar_chart(records: &[ProjectRecord], field: FieldKey) -> BarChartSpec {
    let data = aggregate::rank_descending(&aggregate::aggregate(records, field));
    let colors = palette::generate_colors(data.len());
    BarChartSpec {
        title: format!("Projects by {field}"),
        field,
        horizontal: true,
        data,
        colors,
    }
}

/// Build the Monetization donut with the fixed two-color palette.
#[must_use]
pub fn donut_chart(records: &[ProjectRecord]) -> DonutSpec {
    let data = aggregate::aggregate(records, FieldKey::Monetization);
    let colors = (0..data.len())
        .map(|i| palette::DONUT[i % palette::DONUT.len()])
        .collect();
    DonutSpec { data, colors }
}

/// Build the Outputs treemap: each label/value pair becomes a leaf sized by
/// count. Leaf colors are a fresh draw, independent of the bar charts'.
#[must_use]
pub fn treemap_chart(records: &[ProjectRecord]) -> TreemapSpec {
    let data = aggregate::aggregate(records, FieldKey::Outputs);
    let colors = palette::generate_colors(data.len());
    let leaves = data
        .entries()
        .zip(colors)
        .map(|((group, weight), color)| TreemapLeaf {
            group: group.to_string(),
            weight,
            color,
        })
        .collect();
    TreemapSpec { leaves }
}

/// Shared data-label visibility threshold: suppress labels for values ≤ 0.
#[must_use]
pub fn data_label(value: u64) -> Option<String> {
    (value > 0).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{bar_chart, data_label, donut_chart, line_chart, treemap_chart};
    use crate::palette;
    use crate::record::{FieldKey, ProjectRecord};

    fn catalogue() -> Vec<ProjectRecord> {
        let spec = [
            ("Atlas Revamp", "Q1 2024", "Studio", "Engineering", "Paid", "Web App"),
            ("Brand Kit", "Q2 2024", "Freelance", "Design", "Portfolio", "Design System"),
            ("Churn Model", "Q1 2024", "Studio", "Data", "Paid", "Notebook"),
            ("Docs Portal", "Q4 2023", "Studio", "Engineering", "Portfolio", "Web App"),
        ];
        spec.into_iter()
            .map(
                |(name, period, entity, function, monetization, outputs)| ProjectRecord {
                    name: name.into(),
                    period: period.into(),
                    entity: entity.into(),
                    function: function.into(),
                    monetization: monetization.into(),
                    outputs: outputs.into(),
                    business_value: String::new(),
                },
            )
            .collect()
    }

    #[test]
    fn line_chart_orders_periods_ascending() {
        let spec = line_chart(&catalogue());
        assert_eq!(spec.data.labels, vec!["Q1 2024", "Q2 2024", "Q4 2023"]);
        assert_eq!(spec.data.values, vec![2, 1, 1]);
        assert_eq!(spec.series_name, "# of Projects");
        assert_eq!(spec.stroke, palette::ACCENT);
    }

    #[test]
    fn bar_chart_ranks_descending_with_matching_colors() {
        let spec = bar_chart(&catalogue(), FieldKey::Entity);
        assert_eq!(spec.data.labels, vec!["Studio", "Freelance"]);
        assert_eq!(spec.data.values, vec![3, 1]);
        assert!(spec.horizontal);
        assert_eq!(spec.colors.len(), spec.data.len());
        assert_eq!(spec.title, "Projects by Entity");
    }

    #[test]
    fn donut_uses_fixed_palette_in_label_order() {
        let spec = donut_chart(&catalogue());
        assert_eq!(spec.data.labels, vec!["Paid", "Portfolio"]);
        assert_eq!(spec.colors[0], palette::DONUT[0]);
        assert_eq!(spec.colors[1], palette::DONUT[1]);
    }

    #[test]
    fn treemap_leaves_weighted_by_count() {
        let spec = treemap_chart(&catalogue());
        let web = spec
            .leaves
            .iter()
            .find(|leaf| leaf.group == "Web App")
            .expect("web app leaf");
        assert_eq!(web.weight, 2);
        assert_eq!(spec.leaves.len(), 3);
    }

    #[test]
    fn data_labels_suppressed_at_zero() {
        assert_eq!(data_label(0), None);
        assert_eq!(data_label(3), Some("3".to_string()));
    }
}
