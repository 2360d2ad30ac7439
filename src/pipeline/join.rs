//! Customer/transaction join

use std::collections::HashMap;

use crate::dataset::{Customer, EnrichedCustomer, Id, Transaction};

/// Attach each customer's transactions to it
///
/// Output follows the customer order, and each customer's transactions keep
/// their dataset order. Transactions referencing an unknown customer are
/// dropped without error. Transactions are indexed by `customer_id` first,
/// so this runs in O(customers + transactions).
pub fn join(customers: &[Customer], transactions: &[Transaction]) -> Vec<EnrichedCustomer> {
    let mut by_customer: HashMap<&Id, Vec<&Transaction>> = HashMap::new();
    for tx in transactions {
        by_customer.entry(&tx.customer_id).or_default().push(tx);
    }

    let joined: Vec<EnrichedCustomer> = customers
        .iter()
        .map(|customer| {
            let own = by_customer
                .get(&customer.id)
                .map(|txs| txs.iter().map(|&tx| tx.clone()).collect())
                .unwrap_or_default();
            EnrichedCustomer::new(customer, own)
        })
        .collect();

    tracing::debug!(
        customers = customers.len(),
        transactions = transactions.len(),
        "Joined transactions onto customers"
    );

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new(1, "Alice"),
            Customer::new(2, "Bob"),
            Customer::new(3, "Carol"),
        ]
    }

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(1, 2, "2024-01-01", 10.0),
            Transaction::new(2, 1, "2024-01-01", 50.0),
            Transaction::new(3, 2, "2024-01-02", 20.0),
            Transaction::new(4, 1, "2024-01-03", 25.0),
        ]
    }

    #[test]
    fn test_join_preserves_orders() {
        let joined = join(&customers(), &transactions());

        let names: Vec<_> = joined.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

        let alice_ids: Vec<_> = joined[0].transactions.iter().map(|t| t.id.clone()).collect();
        assert_eq!(alice_ids, vec![Id::from(2), Id::from(4)]);

        let bob_ids: Vec<_> = joined[1].transactions.iter().map(|t| t.id.clone()).collect();
        assert_eq!(bob_ids, vec![Id::from(1), Id::from(3)]);

        assert!(joined[2].transactions.is_empty());
    }

    #[test]
    fn test_join_matches_filter_definition() {
        let customers = customers();
        let transactions = transactions();
        let joined = join(&customers, &transactions);

        for entry in &joined {
            let expected: Vec<Transaction> = transactions
                .iter()
                .filter(|t| t.customer_id == entry.id)
                .cloned()
                .collect();
            assert_eq!(entry.transactions, expected);
        }
    }

    #[test]
    fn test_orphan_transactions_are_excluded() {
        let mut txs = transactions();
        txs.push(Transaction::new(5, 99, "2024-01-04", 1000.0));

        let joined = join(&customers(), &txs);
        let total: usize = joined.iter().map(|c| c.transactions.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_join_empty_inputs() {
        assert!(join(&[], &transactions()).is_empty());

        let joined = join(&customers(), &[]);
        assert_eq!(joined.len(), 3);
        assert!(joined.iter().all(|c| c.transactions.is_empty()));
    }
}
