use yew::prelude::*;
use ternak_common::{HistoryEntry, fetch_history};

use crate::api_client::HttpForecastApi;
use crate::settings;

/// Revenue history shared by the dashboard.
///
/// Fetches once on mount; later reloads set the returned handle directly.
/// A failed load is logged and leaves the state alone, so it stays `None`
/// until the first success.
#[hook]
pub fn use_revenue_history() -> UseStateHandle<Option<Vec<HistoryEntry>>> {
    let history = use_state(|| None::<Vec<HistoryEntry>>);

    {
        let history = history.clone();
        use_effect_with((), move |_| {
            let days = settings::get_settings().history_days;

            wasm_bindgen_futures::spawn_local(async move {
                if let Some(entries) = fetch_history(&HttpForecastApi, days).await {
                    log::debug!("Revenue history loaded with {} entries", entries.len());
                    history.set(Some(entries));
                }
            });
            || ()
        });
    }

    history
}
