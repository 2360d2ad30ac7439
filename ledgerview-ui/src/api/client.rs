//! HTTP Client
//!
//! Fetches the static dataset document served next to the app.

use gloo_net::http::Request;
use ledgerview::{Dataset, LoadError, LoadResult};

/// Default location of the dataset document
pub const DEFAULT_DATA_URL: &str = "/sideData.json";

/// Local storage key that overrides the dataset location
const DATA_URL_KEY: &str = "ledgerview_data_url";

/// Get the dataset URL from local storage or use default
pub fn get_data_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DATA_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Fetch and decode the dataset
pub async fn fetch_dataset() -> LoadResult<Dataset> {
    let url = get_data_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            url,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    Dataset::from_json(&body)
}
