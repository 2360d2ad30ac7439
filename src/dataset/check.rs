//! Dataset consistency check
//!
//! Flags records that load fine but will not behave as expected downstream.
//! Nothing here is fatal: orphan transactions are simply left out of the
//! join, and the rest is reported so a user can fix the source document.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::types::{Dataset, Id};

/// Findings from [`Dataset::check`]
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DatasetReport {
    pub customers: usize,
    pub transactions: usize,
    /// Transactions whose `customer_id` matches no customer
    pub orphan_transactions: Vec<Id>,
    pub duplicate_customer_ids: Vec<Id>,
    pub duplicate_transaction_ids: Vec<Id>,
    /// Transactions whose amount is NaN or infinite
    pub non_finite_amounts: Vec<Id>,
    /// Transactions whose date is not `YYYY-MM-DD`
    pub malformed_dates: Vec<Id>,
}

impl DatasetReport {
    /// Total number of flagged records
    pub fn finding_count(&self) -> usize {
        self.orphan_transactions.len()
            + self.duplicate_customer_ids.len()
            + self.duplicate_transaction_ids.len()
            + self.non_finite_amounts.len()
            + self.malformed_dates.len()
    }

    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }

    /// Emit one log line per kind of finding
    pub fn log(&self) {
        if self.is_clean() {
            tracing::debug!(
                customers = self.customers,
                transactions = self.transactions,
                "Dataset check passed"
            );
            return;
        }

        // Orphans are tolerated by design of the join, keep them quiet
        if !self.orphan_transactions.is_empty() {
            tracing::debug!(
                count = self.orphan_transactions.len(),
                "Transactions reference unknown customers and will not be shown"
            );
        }
        if !self.duplicate_customer_ids.is_empty() {
            tracing::warn!(ids = ?self.duplicate_customer_ids, "Duplicate customer ids");
        }
        if !self.duplicate_transaction_ids.is_empty() {
            tracing::warn!(ids = ?self.duplicate_transaction_ids, "Duplicate transaction ids");
        }
        if !self.non_finite_amounts.is_empty() {
            tracing::warn!(ids = ?self.non_finite_amounts, "Transactions with non-finite amounts");
        }
        if !self.malformed_dates.is_empty() {
            tracing::warn!(ids = ?self.malformed_dates, "Transactions with malformed dates");
        }
    }
}

impl Dataset {
    /// Check the dataset for orphans, duplicates and malformed values
    pub fn check(&self) -> DatasetReport {
        let mut report = DatasetReport {
            customers: self.customers.len(),
            transactions: self.transactions.len(),
            ..Default::default()
        };

        let mut customer_ids = HashSet::with_capacity(self.customers.len());
        for customer in &self.customers {
            if !customer_ids.insert(&customer.id) {
                report.duplicate_customer_ids.push(customer.id.clone());
            }
        }

        let mut transaction_ids = HashSet::with_capacity(self.transactions.len());
        for tx in &self.transactions {
            if !transaction_ids.insert(&tx.id) {
                report.duplicate_transaction_ids.push(tx.id.clone());
            }
            if !customer_ids.contains(&tx.customer_id) {
                report.orphan_transactions.push(tx.id.clone());
            }
            if !tx.amount.is_finite() {
                report.non_finite_amounts.push(tx.id.clone());
            }
            if NaiveDate::parse_from_str(&tx.date, "%Y-%m-%d").is_err() {
                report.malformed_dates.push(tx.id.clone());
            }
        }

        report
    }
}
