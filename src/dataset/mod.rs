//! Dataset model
//!
//! - **types**: Customer, Transaction, Dataset and the joined EnrichedCustomer
//! - **check**: consistency report over a loaded dataset
//! - **error**: load error types
//!
//! The document shape is:
//!
//! ```text
//! { "customers":    [{ "id": <id>, "name": <string> }, ...],
//!   "transactions": [{ "id": <id>, "customer_id": <id>, "date": <string>, "amount": <number> }, ...] }
//! ```

pub mod check;
pub mod error;
pub mod types;

pub use check::DatasetReport;
pub use error::{LoadError, LoadResult};
pub use types::{format_amount, Customer, Dataset, EnrichedCustomer, Id, Transaction};
