//! # Ledgerview
//!
//! Customer transaction dashboard: load a dataset of customers and
//! transactions, search it by name or amount, and chart a selected
//! customer's daily transaction totals.
//!
//! ## Modules
//!
//! - [`dataset`]: Customer/Transaction records, loading errors, consistency check
//! - [`pipeline`]: Join, filter and per-day aggregation
//! - [`chart`]: Bar chart data shaping
//! - [`dashboard`]: Dashboard state (search term, selection, load status)
//! - `source`, `config`, `logging`: native loaders and setup (feature `native`)
//!
//! The pure modules compile for `wasm32` with default features disabled and
//! are shared with the browser front end in `ledgerview-ui`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgerview::{Dashboard, Dataset, Id};
//!
//! let dataset = Dataset::from_json(r#"{
//!     "customers": [{"id": 1, "name": "Alice"}],
//!     "transactions": [
//!         {"id": 1, "customer_id": 1, "date": "2024-01-01", "amount": 50},
//!         {"id": 2, "customer_id": 1, "date": "2024-01-01", "amount": 25}
//!     ]
//! }"#).unwrap();
//!
//! let mut dashboard = Dashboard::with_dataset(dataset);
//! dashboard.set_search_term("50");
//! assert_eq!(dashboard.visible_customers().len(), 1);
//!
//! dashboard.select(&Id::from(1));
//! let totals = dashboard.daily_totals().unwrap();
//! assert_eq!(totals.get("2024-01-01"), Some(75.0));
//! ```

pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod pipeline;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod source;

// Re-export top-level types for convenience
pub use chart::{ChartData, ChartDataset};

pub use dashboard::{Dashboard, LoadStatus, LoadTicket, Selection, TableRow};

pub use dataset::{
    format_amount, Customer, Dataset, DatasetReport, EnrichedCustomer, Id, LoadError, LoadResult,
    Transaction,
};

pub use pipeline::DailyTotals;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, SourceConfig};

#[cfg(feature = "native")]
pub use source::{DatasetSource, FileSource, HttpSource};
