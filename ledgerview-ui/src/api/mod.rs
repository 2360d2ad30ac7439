//! Dataset fetching

pub mod client;

pub use client::{fetch_dataset, get_data_url};
