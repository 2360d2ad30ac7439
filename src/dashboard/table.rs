//! Table rows for the customer/transaction listing

use serde::Serialize;

use crate::dataset::{EnrichedCustomer, Id};

/// One row of the listing: a single transaction of a customer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableRow {
    pub customer_id: Id,
    /// Set only on the customer's first row
    pub customer_name: Option<String>,
    pub transaction_id: Id,
    pub date: String,
    pub amount: f64,
    pub amount_text: String,
}

/// Flatten customers into rows, one per transaction
///
/// Customers without transactions produce no rows.
pub fn rows(customers: &[EnrichedCustomer]) -> Vec<TableRow> {
    customers
        .iter()
        .flat_map(|customer| {
            customer
                .transactions
                .iter()
                .enumerate()
                .map(move |(idx, tx)| TableRow {
                    customer_id: customer.id.clone(),
                    customer_name: (idx == 0).then(|| customer.name.clone()),
                    transaction_id: tx.id.clone(),
                    date: tx.date.clone(),
                    amount: tx.amount,
                    amount_text: tx.amount_text(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Customer, Transaction};
    use crate::pipeline::join;

    #[test]
    fn test_rows() {
        let customers = join(
            &[
                Customer::new(1, "Alice"),
                Customer::new(2, "Bob"),
                Customer::new(3, "Carol"),
            ],
            &[
                Transaction::new(1, 1, "2024-01-01", 50.0),
                Transaction::new(2, 3, "2024-01-02", 7.5),
                Transaction::new(3, 1, "2024-01-03", 25.0),
            ],
        );

        let rows = rows(&customers);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].customer_name.as_deref(), Some("Alice"));
        assert_eq!(rows[0].amount_text, "50");
        assert_eq!(rows[1].customer_name, None);
        assert_eq!(rows[1].customer_id, Id::from(1));
        assert_eq!(rows[1].date, "2024-01-03");

        // Bob has no transactions and no row
        assert_eq!(rows[2].customer_name.as_deref(), Some("Carol"));
        assert_eq!(rows[2].amount_text, "7.5");
    }
}
