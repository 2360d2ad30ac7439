//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="spinner-border spinner-border-sm" role="status" />
    }
}

/// Skeleton rows for the table while the dataset loads
#[component]
pub fn TableSkeleton(
    #[prop(default = 3)]
    rows: usize,
    columns: usize,
) -> impl IntoView {
    view! {
        {(0..rows).map(|_| view! {
            <tr class="placeholder-glow">
                {(0..columns).map(|_| view! {
                    <td><span class="placeholder col-8" /></td>
                }).collect_view()}
            </tr>
        }).collect_view()}
    }
}
