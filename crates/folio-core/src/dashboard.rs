//! Dashboard model assembly.

use serde::Serialize;

use crate::chart::{self, BarChartSpec, DonutSpec, LineChartSpec, TreemapSpec};
use crate::filter::{self, FILTER_FIELDS};
use crate::record::{FieldKey, ProjectRecord};
use crate::summary::{self, Summary};
use crate::table;

/// Filter options for one control: the field plus its distinct values.
///
/// The implicit "no filter" default is not part of the list; controls add it
/// themselves.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub field: FieldKey,
    pub values: Vec<String>,
}

/// Everything a rendering collaborator needs for one page load.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardModel {
    pub summary: Summary,
    pub period_line: LineChartSpec,
    pub entity_bar: BarChartSpec,
    pub function_bar: BarChartSpec,
    pub monetization_donut: DonutSpec,
    pub outputs_treemap: TreemapSpec,
    pub filter_options: Vec<FilterOptions>,
    /// Table rows, pre-sorted by period descending.
    pub rows: Vec<ProjectRecord>,
}

impl DashboardModel {
    /// Assemble the model in the fixed render order: summary first for fast
    /// above-the-fold feedback, then the five charts, then filter options
    /// and table rows.
    #[must_use]
    pub fn build(records: &[ProjectRecord]) -> Self {
        let summary = summary::summarize(records);
        let period_line = chart::line_chart(records);
        let entity_bar = chart::bar_chart(records, FieldKey::Entity);
        let function_bar = chart::bar_chart(records, FieldKey::Function);
        let monetization_donut = chart::donut_chart(records);
        let outputs_treemap = chart::treemap_chart(records);
        let filter_options = FILTER_FIELDS
            .into_iter()
            .map(|field| FilterOptions {
                field,
                values: filter::distinct_values(records, field),
            })
            .collect();
        let mut rows = records.to_vec();
        table::sort_by_period_desc(&mut rows);

        Self {
            summary,
            period_line,
            entity_bar,
            function_bar,
            monetization_donut,
            outputs_treemap,
            filter_options,
            rows,
        }
    }
}
