//! Transformation pipeline
//!
//! Pure functions that turn a loaded dataset into what the dashboard shows:
//!
//! ```text
//! Dataset → join → [EnrichedCustomer] → filter(term) → table rows
//!                         │
//!                         └── selected customer → DailyTotals → ChartData
//! ```

pub mod aggregate;
pub mod filter;
pub mod join;

pub use aggregate::DailyTotals;
pub use filter::{filter, matches};
pub use join::join;
