//! Dashboard State
//!
//! Reactive wrapper around [`ledgerview::Dashboard`] using Leptos signals.

use leptos::*;
use ledgerview::{ChartData, Dashboard, Id, TableRow};

use crate::api;

/// How long the error toast stays up
const NOTICE_TIMEOUT_MS: u32 = 5000;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Dataset, search term, selection and load status
    pub dashboard: RwSignal<Dashboard>,
    /// Transient error message (for toasts)
    pub notice: RwSignal<Option<String>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        dashboard: create_rw_signal(Dashboard::new()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Get the dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    expect_context::<DashboardState>()
}

impl DashboardState {
    /// Fetch the dataset and apply it
    ///
    /// A fetch that finishes after a newer one was started is ignored by
    /// the dashboard, so calling this again is safe.
    pub fn load(self) {
        let Some(ticket) = self.dashboard.try_update(|d| d.begin_load()) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_dataset().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to load dataset: {}", e).into());
            }

            let applied = self
                .dashboard
                .try_update(|d| d.complete_load(ticket, result))
                .unwrap_or(false);

            if applied {
                if let Some(err) = self.dashboard.with_untracked(|d| d.last_error().cloned()) {
                    self.show_error(&format!("Could not load data: {}", err));
                }
            }
        });
    }

    pub fn set_search_term(self, term: String) {
        self.dashboard.update(|d| d.set_search_term(term));
    }

    pub fn select(self, id: &Id) {
        self.dashboard.update(|d| {
            d.select(id);
        });
    }

    pub fn clear_selection(self) {
        self.dashboard.update(|d| d.clear_selection());
    }

    /// Table rows for the current search term
    pub fn rows(self) -> Memo<Vec<TableRow>> {
        create_memo(move |_| self.dashboard.with(|d| d.table_rows()))
    }

    /// Chart input for the current selection
    pub fn chart_data(self) -> Memo<ChartData> {
        create_memo(move |_| self.dashboard.with(|d| d.chart_data()))
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice.set(None);
        })
        .forget();
    }
}
