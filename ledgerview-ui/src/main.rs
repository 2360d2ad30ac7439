//! Ledgerview Dashboard
//!
//! Single-page customer transaction dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Search customers by name or transaction amount
//! - Customer/transaction table, click a row to select the customer
//! - Bar chart of the selected customer's daily totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the static dataset document once on mount; all
//! joining, filtering and aggregation is done by the `ledgerview` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
