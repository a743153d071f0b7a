pub mod history;
pub mod prediction;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use ternak_common::{
    ClientError, ForecastApi, HistoryEntry, PredictionReport, PredictionRequest, Result,
};

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Error body the backend sends alongside non-OK statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Reads the body of a response, turning non-OK statuses into errors that
/// carry the backend's message when it sent one.
async fn read_body(method: &str, endpoint: &str, response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        let err = ClientError::Transport(e.to_string());
        log::error!("{} {} - Failed to read body: {}", method, endpoint, err);
        err
    })?;

    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|err| err.message);
        let err = ClientError::http(status, message);
        log::error!("{} {} - API error: {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received ({} bytes)", method, endpoint, body.len());
    Ok(body)
}

/// Common GET request handler, returns the raw body of an OK response
pub async fn get(endpoint: &str) -> Result<String> {
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let err = ClientError::Transport(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    read_body("GET", endpoint, response).await
}

/// Common POST request handler with a JSON body
pub async fn post<B>(endpoint: &str, body: &B) -> Result<String>
where
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let err = ClientError::Transport(format!("Failed to serialize request: {}", e));
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ClientError::Transport(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    read_body("POST", endpoint, response).await
}

/// [`ForecastApi`] backed by the HTTP endpoints configured in settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpForecastApi;

#[async_trait(?Send)]
impl ForecastApi for HttpForecastApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionReport> {
        prediction::predict(request).await
    }

    async fn revenue_history(&self, days: u32) -> Result<Vec<HistoryEntry>> {
        history::get_revenue_history(days).await
    }
}
