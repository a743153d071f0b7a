use ternak_common::{HistoryEntry, Result, decode_history, history_endpoint};

use crate::api_client;

pub async fn get_revenue_history(days: u32) -> Result<Vec<HistoryEntry>> {
    log::trace!("Fetching revenue history for the last {} days", days);

    let result = api_client::get(&history_endpoint(days))
        .await
        .and_then(|body| decode_history(&body));

    if let Err(ref e) = result {
        log::warn!("Failed to fetch revenue history: {}", e);
    } else {
        log::info!("Successfully fetched revenue history");
    }

    result
}

/// Link target for downloading the backend's revenue spreadsheet
pub fn export_url() -> String {
    api_client::api_url("/export_data")
}
