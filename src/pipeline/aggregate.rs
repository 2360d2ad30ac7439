//! Per-day transaction totals for one customer

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::dataset::{EnrichedCustomer, Transaction};

/// Date → summed amount, in first-seen date order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    entries: Vec<(String, f64)>,
}

impl DailyTotals {
    /// Group transactions by date and sum their amounts
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut entries: Vec<(String, f64)> = Vec::new();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for tx in transactions {
            match positions.get(tx.date.as_str()) {
                Some(&idx) => entries[idx].1 += tx.amount,
                None => {
                    positions.insert(tx.date.as_str(), entries.len());
                    entries.push((tx.date.clone(), tx.amount));
                }
            }
        }

        Self { entries }
    }

    /// Totals for the selected customer, `None` when nothing is selected
    pub fn for_selection(customer: Option<&EnrichedCustomer>) -> Option<Self> {
        customer.map(|c| Self::from_transactions(&c.transactions))
    }

    pub fn get(&self, date: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(d, total)| (d.as_str(), *total))
    }

    pub fn dates(&self) -> Vec<String> {
        self.entries.iter().map(|(d, _)| d.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, total)| *total).collect()
    }

    /// Sum over all days
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    /// Largest single-day magnitude, `None` when empty
    pub fn peak(&self) -> Option<f64> {
        self.entries.iter().map(|(_, total)| total.abs()).reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object keyed by date
impl Serialize for DailyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, total) in &self.entries {
            map.serialize_entry(date, total)?;
        }
        map.end()
    }
}
