//! Selection and load status state machines

use crate::dataset::{Id, LoadError};

/// Which customer the chart is showing
///
/// ```text
/// NoSelection ──select──▶ CustomerSelected ──select──▶ CustomerSelected
///      ▲                         │
///      └──────── clear ──────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    CustomerSelected(Id),
}

impl Selection {
    pub fn customer_id(&self) -> Option<&Id> {
        match self {
            Selection::NoSelection => None,
            Selection::CustomerSelected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.customer_id() == Some(id)
    }
}

/// Status of the most recent dataset load
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    /// No load started yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last load failed; the previous dataset is still in place
    Failed(LoadError),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Handle for one in-flight load
///
/// Only the ticket from the most recent `begin_load` can complete a load;
/// older tickets are stale and their results are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_accessors() {
        let none = Selection::default();
        assert_eq!(none.customer_id(), None);
        assert!(!none.is_selected(&Id::from(1)));

        let selected = Selection::CustomerSelected(Id::from(1));
        assert!(selected.is_selected(&Id::from(1)));
        assert!(!selected.is_selected(&Id::from("1")));
    }

    #[test]
    fn test_load_status() {
        assert!(LoadStatus::Loading.is_loading());
        assert!(LoadStatus::Loaded.error().is_none());

        let failed = LoadStatus::Failed(LoadError::Timeout);
        assert_eq!(failed.error(), Some(&LoadError::Timeout));
        assert!(!failed.is_loading());
    }
}
