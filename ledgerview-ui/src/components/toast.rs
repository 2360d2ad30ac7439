//! Notification Components
//!
//! Transient error toasts and the persistent load failure banner.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::use_dashboard_state;

/// Toast for the current notice, if any
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div class="position-fixed bottom-0 end-0 p-3" style="z-index: 1050">
            {move || state.notice.get().map(|msg| view! {
                <div class="toast show align-items-center text-bg-danger border-0" role="alert">
                    <div class="d-flex">
                        <div class="toast-body">
                            <span class="me-2">"✕"</span>
                            {msg}
                        </div>
                        <button
                            type="button"
                            class="btn-close btn-close-white me-2 m-auto"
                            on:click=move |_| state.notice.set(None)
                        />
                    </div>
                </div>
            })}
        </div>
    }
}

/// Banner shown while loading or after a failed load
///
/// A failed load keeps whatever was shown before; the banner stays until a
/// later load succeeds.
#[component]
pub fn LoadBanner() -> impl IntoView {
    let state = use_dashboard_state();
    let status = move || {
        state
            .dashboard
            .with(|d| (d.is_loading(), d.last_error().map(|e| e.to_string())))
    };

    view! {
        {move || match status() {
            (true, _) => view! {
                <div class="alert alert-info w-50 m-auto mt-3 text-center">
                    <InlineLoading />
                    <span class="ms-2">"Loading customers..."</span>
                </div>
            }.into_view(),
            (false, Some(error)) => view! {
                <div class="alert alert-warning w-50 m-auto mt-3 d-flex align-items-center justify-content-between">
                    <span>{format!("Data could not be loaded: {}", error)}</span>
                    <button
                        class="btn btn-sm btn-outline-dark"
                        on:click=move |_| state.load()
                    >
                        "Retry"
                    </button>
                </div>
            }.into_view(),
            (false, None) => view! {}.into_view(),
        }}
    }
}
