//! Core data types for the customer/transaction dataset
//!
//! This module defines the records loaded from the dataset document:
//! - `Id`: identifier shared by customers and transactions
//! - `Customer` and `Transaction`: immutable source records
//! - `Dataset`: the combined document
//! - `EnrichedCustomer`: a customer joined with its transactions

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{LoadError, LoadResult};

/// Record identifier
///
/// The dataset document may use JSON numbers or strings. Numbers compare by
/// value, so `1` and `1.0` are the same identifier, while `1` and `"1"` are
/// different identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(f64),
    Text(String),
}

impl Id {
    /// Candidate identifiers for user-typed input, numeric form first
    pub fn candidates(input: &str) -> Vec<Id> {
        let input = input.trim();
        let mut ids = Vec::with_capacity(2);
        if let Ok(n) = input.parse::<f64>() {
            if n.is_finite() {
                ids.push(Id::Number(n));
            }
        }
        ids.push(Id::Text(input.to_string()));
        ids
    }
}

// -0.0 and 0.0 are one identifier
fn number_key(n: f64) -> u64 {
    if n == 0.0 {
        0
    } else {
        n.to_bits()
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Id::Number(a), Id::Number(b)) => number_key(*a) == number_key(*b),
            (Id::Text(a), Id::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Id {}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Id::Number(n) => {
                state.write_u8(0);
                number_key(*n).hash(state);
            }
            Id::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Id::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
                serializer.serialize_i64(*n as i64)
            }
            Id::Number(n) => serializer.serialize_f64(*n),
            Id::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => f.write_str(&format_amount(*n)),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n as f64)
    }
}

impl From<f64> for Id {
    fn from(n: f64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

/// A customer record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Id,
    pub name: String,
}

impl Customer {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single transaction belonging to a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Id,
    /// References `Customer::id`
    pub customer_id: Id,
    /// Calendar date, normally `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        id: impl Into<Id>,
        customer_id: impl Into<Id>,
        date: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            date: date.into(),
            amount,
        }
    }

    /// The amount as shown in the table and matched by search
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// The dataset document: `{ "customers": [...], "transactions": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    /// Parse a dataset document
    pub fn from_json(text: &str) -> LoadResult<Self> {
        serde_json::from_str(text).map_err(LoadError::from)
    }

    /// Parse a dataset document from raw bytes
    pub fn from_slice(bytes: &[u8]) -> LoadResult<Self> {
        serde_json::from_slice(bytes).map_err(LoadError::from)
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.transactions.is_empty()
    }
}

/// A customer together with every transaction that references it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedCustomer {
    pub id: Id,
    pub name: String,
    /// Transactions in dataset order
    pub transactions: Vec<Transaction>,
}

impl EnrichedCustomer {
    pub fn new(customer: &Customer, transactions: Vec<Transaction>) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            transactions,
        }
    }

    /// Sum of all transaction amounts
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

/// Render a number the way a JavaScript `Number#toString` would
///
/// Integral values drop the fractional part, `-0` renders as `0`, and very
/// large or very small magnitudes switch to exponent notation (`1e+21`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    format!("{}", value)
}
