//! App Root Component
//!
//! Single dashboard page: search box, customer table and chart.

use leptos::*;

use crate::api;
use crate::components::{BarChart, CustomerTable, LoadBanner, SearchBox, Toast};
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    // Fetch the dataset once on mount
    state.load();

    view! {
        <div class="container mt-5 custom-container">
            <LoadBanner />

            <div class="data w-75 m-auto">
                <SearchBox />
                <CustomerTable />
            </div>

            <BarChart />

            <Footer />

            <Toast />
        </div>
    }
}

/// Footer showing where data comes from and how much was loaded
#[component]
fn Footer() -> impl IntoView {
    let state = crate::state::use_dashboard_state();
    let data_url = api::get_data_url();

    let summary = move || {
        state.dashboard.with(|d| {
            format!(
                "{} customers, {} transactions",
                d.dataset().customers.len(),
                d.dataset().transactions.len()
            )
        })
    };

    view! {
        <footer class="text-muted small text-center mt-5 mb-3">
            <span>{data_url}</span>
            " · "
            <span>{summary}</span>
        </footer>
    }
}
