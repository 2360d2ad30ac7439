//! Free-text customer search

use crate::dataset::EnrichedCustomer;

/// Whether a customer matches a search term
///
/// A customer matches when its name contains the term ignoring case, or when
/// any of its transaction amounts, rendered as text, contains the term. The
/// empty term matches every customer.
pub fn matches(customer: &EnrichedCustomer, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    customer.name.to_lowercase().contains(&term.to_lowercase())
        || customer
            .transactions
            .iter()
            .any(|tx| tx.amount_text().contains(term))
}

/// Keep the customers matching `term`, in their original order
pub fn filter(customers: &[EnrichedCustomer], term: &str) -> Vec<EnrichedCustomer> {
    let kept: Vec<EnrichedCustomer> = customers
        .iter()
        .filter(|c| matches(c, term))
        .cloned()
        .collect();

    tracing::debug!(term, total = customers.len(), kept = kept.len(), "Filtered customers");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Customer, Transaction};
    use crate::pipeline::join;

    fn sample() -> Vec<EnrichedCustomer> {
        join(
            &[
                Customer::new(1, "Alice"),
                Customer::new(2, "Bob"),
                Customer::new(3, "Ålborg Ltd"),
            ],
            &[
                Transaction::new(1, 1, "2024-01-01", 50.0),
                Transaction::new(2, 1, "2024-01-01", 25.0),
                Transaction::new(3, 2, "2024-01-02", 12.5),
                Transaction::new(4, 3, "2024-01-02", 7.0),
            ],
        )
    }

    fn names(entries: &[EnrichedCustomer]) -> Vec<&str> {
        entries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_name_match_ignores_case() {
        let data = sample();
        assert_eq!(names(&filter(&data, "ALI")), vec!["Alice"]);
        assert_eq!(names(&filter(&data, "åLB")), vec!["Ålborg Ltd"]);
    }

    #[test]
    fn test_amount_match() {
        let data = sample();
        assert_eq!(names(&filter(&data, "50")), vec!["Alice"]);
        assert_eq!(names(&filter(&data, "2.5")), vec!["Bob"]);
        // 50 renders as "50", never "50.0"
        assert!(filter(&data, "50.0").is_empty());
    }

    #[test]
    fn test_term_can_match_name_or_amount() {
        let data = sample();
        // "b" hits Bob and Ålborg by name; "5" hits Alice (50, 25) and Bob (12.5)
        assert_eq!(names(&filter(&data, "b")), vec!["Bob", "Ålborg Ltd"]);
        assert_eq!(names(&filter(&data, "5")), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let data = sample();
        assert_eq!(filter(&data, ""), data);
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = sample();
        for term in ["", "a", "5", "bob", "zzz", "2.5"] {
            let once = filter(&data, term);
            let twice = filter(&once, term);
            assert_eq!(once, twice, "term {:?}", term);
        }
    }
}
