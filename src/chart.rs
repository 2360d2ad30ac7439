//! Chart data shaping
//!
//! Reshapes [`DailyTotals`] into the bar chart structure consumed by the
//! renderers: `{labels, datasets: [{label, data, backgroundColor, ...}]}`.

use serde::Serialize;

use crate::pipeline::DailyTotals;

/// Series label for the daily totals chart
pub const SERIES_LABEL: &str = "Total Transaction Amount";

pub const BAR_FILL: &str = "rgba(75, 192, 192, 0.6)";
pub const BAR_BORDER: &str = "rgba(75, 192, 192, 1)";

/// Bar chart input
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One series of bars with its styling
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

impl ChartData {
    /// Chart data for optional totals; no totals gives empty labels and data
    pub fn from_totals(totals: Option<&DailyTotals>) -> Self {
        let (labels, data) = totals
            .map(|t| (t.dates(), t.values()))
            .unwrap_or_default();

        Self {
            labels,
            datasets: vec![ChartDataset {
                label: SERIES_LABEL.to_string(),
                data,
                background_color: BAR_FILL.to_string(),
                border_color: BAR_BORDER.to_string(),
                border_width: 1,
            }],
        }
    }

    /// Labels paired with values of the first series
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let data = self.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[]);
        self.labels.iter().map(String::as_str).zip(data.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Title shown above the chart for a selected customer
pub fn chart_title(customer_name: &str) -> String {
    format!("{} per Day for {}", SERIES_LABEL, customer_name)
}
