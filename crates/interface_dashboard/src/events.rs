//! Filter-change event handling
//!
//! Each dropdown change is one event: parse the selected value, aggregate
//! the table, render the chart. Nothing is kept between events.

use domain_analytics::{AggregatedRow, ClaimsTable, RegionFilter};
use tracing::debug;

use crate::chart::ChartFigure;

/// Everything produced for one dropdown selection
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChangeOutcome {
    pub filter: RegionFilter,
    /// Whether the selected region exists in the table
    pub known_region: bool,
    pub rows: Vec<AggregatedRow>,
    pub figure: ChartFigure,
}

/// Handles a region selection; no value means `All`
pub fn on_filter_change(table: &ClaimsTable, value: Option<&str>) -> FilterChangeOutcome {
    let filter = value.map(RegionFilter::from_value).unwrap_or_default();
    let known_region = table.is_known(&filter);
    if !known_region {
        debug!(filter = %filter, "Region not present in dataset, chart will be empty");
    }

    let rows = table.aggregate(&filter);
    let figure = ChartFigure::render(&filter, &rows);

    FilterChangeOutcome {
        filter,
        known_region,
        rows,
        figure,
    }
}
