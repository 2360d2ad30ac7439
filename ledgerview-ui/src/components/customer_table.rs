//! Customer Table Component
//!
//! One row per transaction of every customer matching the search term.
//! Clicking a row selects that customer for the chart.

use leptos::*;
use ledgerview::TableRow;

use crate::components::TableSkeleton;
use crate::state::use_dashboard_state;

/// Placeholder rows only stand in for data that has never arrived; a reload
/// keeps the previous rows on screen.
pub fn shows_skeleton(loading: bool, dataset_empty: bool) -> bool {
    loading && dataset_empty
}

#[component]
pub fn CustomerTable() -> impl IntoView {
    let state = use_dashboard_state();
    let rows = state.rows();
    let skeleton = move || {
        state
            .dashboard
            .with(|d| shows_skeleton(d.is_loading(), d.dataset().is_empty()))
    };

    view! {
        <table id="table" class="table table-hover table-bordered text-center custom-table">
            <thead class="thead-dark">
                <tr>
                    <th>"Customer Name"</th>
                    <th>"Transaction Date"</th>
                    <th>"Transaction Amount"</th>
                </tr>
            </thead>
            <tbody id="tableBody">
                {move || {
                    if skeleton() {
                        view! { <TableSkeleton columns=3 /> }.into_view()
                    } else {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="text-muted">"No matching customers"</td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter()
                                .map(|row| view! { <CustomerRow row=row /> })
                                .collect_view()
                        }
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn CustomerRow(row: TableRow) -> impl IntoView {
    let state = use_dashboard_state();
    let customer_id = row.customer_id.clone();
    let highlight_id = row.customer_id.clone();

    let is_selected = move || {
        state
            .dashboard
            .with(|d| d.selection().is_selected(&highlight_id))
    };

    view! {
        <tr
            class:table-active=is_selected
            style="cursor: pointer"
            on:click=move |_| state.select(&customer_id)
        >
            <td class="align-middle">{row.customer_name.unwrap_or_default()}</td>
            <td class="align-middle">{row.date}</td>
            <td class="align-middle">{row.amount_text}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_only_before_first_data() {
        assert!(shows_skeleton(true, true));
        assert!(!shows_skeleton(true, false));
        assert!(!shows_skeleton(false, true));
        assert!(!shows_skeleton(false, false));
    }
}
