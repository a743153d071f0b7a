use ternak_common::{PredictionReport, PredictionRequest, Result, decode_prediction};

use crate::api_client;

pub async fn predict(request: &PredictionRequest) -> Result<PredictionReport> {
    log::trace!(
        "Requesting prediction for ternak_besar={}, ternak_kecil={}",
        request.large_livestock_count(),
        request.small_livestock_count()
    );

    let result = api_client::post("/predict", request)
        .await
        .and_then(|body| decode_prediction(&body));

    match &result {
        Ok(report) => log::info!("Prediction received with {} weekly rows", report.predictions.len()),
        Err(e) => log::error!("Failed to fetch prediction: {}", e),
    }

    result
}
