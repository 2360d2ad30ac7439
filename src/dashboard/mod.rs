//! Dashboard state
//!
//! The single owner of everything the dashboard view shows: the loaded
//! dataset (and its memoized join), the search term, the selected customer
//! and the status of the last load. All derived views are recomputed from
//! this state on demand.
//!
//! # Loading
//!
//! ```text
//! begin_load() ──▶ ticket ──▶ fetch ──▶ complete_load(ticket, result)
//!                                          │
//!                                          ├─ stale ticket  → discarded
//!                                          ├─ Ok(dataset)   → replace + re-join
//!                                          └─ Err(error)    → keep dataset, Failed(error)
//! ```

pub mod selection;
pub mod table;

pub use selection::{LoadStatus, LoadTicket, Selection};
pub use table::TableRow;

use crate::chart::{self, ChartData};
use crate::dataset::{Dataset, EnrichedCustomer, Id, LoadError, LoadResult};
use crate::pipeline::{self, DailyTotals};

/// Dashboard state and its transitions
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    dataset: Dataset,
    /// Join of `dataset`, rebuilt whenever the dataset is replaced
    customers: Vec<EnrichedCustomer>,
    /// Bumped on every dataset replacement
    version: u64,
    search_term: String,
    selection: Selection,
    status: LoadStatus,
    latest_ticket: u64,
}

impl Dashboard {
    /// Empty dashboard, nothing loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Dashboard with a dataset already in place
    pub fn with_dataset(dataset: Dataset) -> Self {
        let mut dashboard = Self::new();
        dashboard.replace_dataset(dataset);
        dashboard.status = LoadStatus::Loaded;
        dashboard
    }

    // ============ Loading ============

    /// Start a load; only the returned ticket may complete it
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.status = LoadStatus::Loading;
        tracing::debug!(generation = self.latest_ticket, "Dataset load started");
        LoadTicket(self.latest_ticket)
    }

    /// Apply the result of a load
    ///
    /// Returns `false` when the ticket was superseded by a later
    /// `begin_load`, in which case the result is dropped. A failed load
    /// keeps the current dataset and records the error.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: LoadResult<Dataset>) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::warn!(
                generation = ticket.0,
                latest = self.latest_ticket,
                "Discarding result of superseded dataset load"
            );
            return false;
        }

        match result {
            Ok(dataset) => {
                tracing::info!(
                    customers = dataset.customers.len(),
                    transactions = dataset.transactions.len(),
                    "Dataset loaded"
                );
                dataset.check().log();
                self.replace_dataset(dataset);
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Dataset load failed, keeping previous data");
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    fn replace_dataset(&mut self, dataset: Dataset) {
        self.customers = pipeline::join(&dataset.customers, &dataset.transactions);
        self.dataset = dataset;
        self.version += 1;
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.status.error()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of times the dataset has been replaced
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Every customer with its transactions
    pub fn customers(&self) -> &[EnrichedCustomer] {
        &self.customers
    }

    // ============ Search ============

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Customers matching the current search term
    pub fn visible_customers(&self) -> Vec<EnrichedCustomer> {
        pipeline::filter(&self.customers, &self.search_term)
    }

    /// Table rows for the visible customers
    pub fn table_rows(&self) -> Vec<TableRow> {
        table::rows(&self.visible_customers())
    }

    // ============ Selection ============

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a customer by id
    ///
    /// Returns `false` and leaves the selection unchanged when no customer
    /// has that id.
    pub fn select(&mut self, id: &Id) -> bool {
        if self.find_customer(id).is_none() {
            tracing::debug!(%id, "Ignoring selection of unknown customer");
            return false;
        }
        self.selection = Selection::CustomerSelected(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::NoSelection;
    }

    pub fn find_customer(&self, id: &Id) -> Option<&EnrichedCustomer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    /// Look up a customer from typed input, trying the numeric id first
    pub fn resolve_customer(&self, input: &str) -> Option<&EnrichedCustomer> {
        Id::candidates(input)
            .iter()
            .find_map(|id| self.find_customer(id))
    }

    /// The selected customer as of the current dataset
    pub fn selected_customer(&self) -> Option<&EnrichedCustomer> {
        self.selection
            .customer_id()
            .and_then(|id| self.find_customer(id))
    }

    /// Daily totals for the selected customer
    pub fn daily_totals(&self) -> Option<DailyTotals> {
        DailyTotals::for_selection(self.selected_customer())
    }

    /// Chart input for the selected customer
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_totals(self.daily_totals().as_ref())
    }

    pub fn chart_title(&self) -> Option<String> {
        self.selected_customer().map(|c| chart::chart_title(&c.name))
    }
}
