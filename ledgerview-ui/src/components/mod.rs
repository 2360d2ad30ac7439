//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod chart;
pub mod customer_table;
pub mod loading;
pub mod search;
pub mod toast;

pub use chart::BarChart;
pub use customer_table::CustomerTable;
pub use loading::{InlineLoading, TableSkeleton};
pub use search::SearchBox;
pub use toast::{LoadBanner, Toast};
