//! Search Box Component

use leptos::*;

use crate::state::use_dashboard_state;

/// Free-text search over customer names and transaction amounts
#[component]
pub fn SearchBox() -> impl IntoView {
    let state = use_dashboard_state();
    let term = move || state.dashboard.with(|d| d.search_term().to_string());

    view! {
        <input
            id="search"
            type="text"
            class="form-control mb-5 mt-5 w-50 m-auto text-center"
            placeholder="Search by Name or Transaction Amount"
            prop:value=term
            on:input=move |ev| state.set_search_term(event_target_value(&ev))
        />
    }
}
