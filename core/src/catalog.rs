//! Built-in visual type catalog.

use std::collections::HashSet;

/// Type identifiers of visuals shipped natively by the host platform.
///
/// Membership is case-sensitive. The list cannot be proven complete against
/// any given platform version, so classification keeps an explicit fallback
/// for off-catalog types.
const STANDARD_TYPES: &[&str] = &[
    "actionButton",
    "areaChart",
    "barChart",
    "basicShape",
    "card",
    "clusteredBarChart",
    "clusteredColumnChart",
    "columnChart",
    "decompositionTreeVisual",
    "donutChart",
    "filledMap",
    "funnel",
    "funnelChart",
    "gauge",
    "hundredPercentStackedAreaChart",
    "hundredPercentStackedBarChart",
    "hundredPercentStackedColumnChart",
    "image",
    "kpi",
    "lineChart",
    "lineClusteredColumnComboChart",
    "lineStackedAreaChart",
    "lineStackedColumnComboChart",
    "map",
    "matrix",
    "multiRowCard",
    "pieChart",
    "pivotTable",
    "ribbon",
    "ribbonChart",
    "scatterChart",
    "shape",
    "slicer",
    "stackedAreaChart",
    "stackedBarChart",
    "stackedColumnChart",
    "table",
    "textbox",
    "treemap",
    "waterfallChart",
];

/// Immutable set of known built-in visual types.
///
/// Built once at process start and shared read-only; it is never mutated per
/// report, so no synchronization is required for concurrent scans.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    types: HashSet<&'static str>,
}

impl BuiltinCatalog {
    /// The standard catalog of built-in visual types.
    pub fn standard() -> Self {
        Self {
            types: STANDARD_TYPES.iter().copied().collect(),
        }
    }

    pub fn contains(&self, visual_type: &str) -> bool {
        self.types.contains(visual_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
