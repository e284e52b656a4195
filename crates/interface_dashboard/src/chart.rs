//! Chart rendering
//!
//! Turns aggregated rows into a bar chart figure in the JSON shape the
//! browser charting library (Plotly) draws directly.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use domain_analytics::{AggregatedRow, RegionFilter};

pub const X_AXIS_TITLE: &str = "Policy Type";
pub const Y_AXIS_TITLE: &str = "Total Claim Amount ($)";

const BACKGROUND: &str = "white";
const GRID_COLOR: &str = "#EBF0F8";

/// Chart title for a filter, e.g. `Total Claim Amount by Policy Type (North)`
pub fn chart_title(filter: &RegionFilter) -> String {
    format!("Total Claim Amount by Policy Type ({})", filter.label())
}

/// A complete figure: one bar trace plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    /// Policy types
    pub x: Vec<String>,
    /// Summed claim amounts
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    /// Horizontal position, 0.5 centers the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    pub gridcolor: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            title: Title {
                text: text.to_string(),
                x: None,
            },
            gridcolor: GRID_COLOR.to_string(),
        }
    }
}

impl ChartFigure {
    /// Renders the bar chart for the rows produced under `filter`
    pub fn render(filter: &RegionFilter, rows: &[AggregatedRow]) -> Self {
        let trace = BarTrace {
            trace_type: "bar".to_string(),
            x: rows.iter().map(|row| row.policy_type.clone()).collect(),
            y: rows
                .iter()
                .map(|row| row.total_claim_amount.to_f64().unwrap_or_default())
                .collect(),
        };

        Self {
            data: vec![trace],
            layout: ChartLayout {
                title: Title {
                    text: chart_title(filter),
                    x: Some(0.5),
                },
                xaxis: Axis::titled(X_AXIS_TITLE),
                yaxis: Axis::titled(Y_AXIS_TITLE),
                plot_bgcolor: BACKGROUND.to_string(),
                paper_bgcolor: BACKGROUND.to_string(),
            },
        }
    }

    /// Number of bars drawn
    pub fn bar_count(&self) -> usize {
        self.data.iter().map(|trace| trace.x.len()).sum()
    }
}
