use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

pub const NOT_A_NUMBER: &str = "Input harus berupa angka";
pub const NEGATIVE_COUNT: &str = "Jumlah ternak tidak boleh negatif";
pub const PREDICTION_FAILED: &str = "Prediksi gagal";

/// Request body for `POST /predict`.
///
/// Only constructed through [`parse_counts`] or [`PredictionRequest::new`], so
/// both counts are always finite and non-negative.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PredictionRequest {
    #[serde(rename = "ternak_besar")]
    large_livestock_count: f64,
    #[serde(rename = "ternak_kecil")]
    small_livestock_count: f64,
}

impl PredictionRequest {
    pub fn new(large_livestock_count: f64, small_livestock_count: f64) -> Result<Self> {
        for count in [large_livestock_count, small_livestock_count] {
            if !count.is_finite() {
                return Err(ClientError::Validation(NOT_A_NUMBER.to_string()));
            }
        }
        if large_livestock_count < 0.0 || small_livestock_count < 0.0 {
            return Err(ClientError::Validation(NEGATIVE_COUNT.to_string()));
        }
        // `-0` passes the sign check; send it as plain zero
        Ok(Self {
            large_livestock_count: large_livestock_count.abs(),
            small_livestock_count: small_livestock_count.abs(),
        })
    }

    pub fn large_livestock_count(&self) -> f64 {
        self.large_livestock_count
    }

    pub fn small_livestock_count(&self) -> f64 {
        self.small_livestock_count
    }
}

/// Validates the two raw form fields.
///
/// Both fields are checked for being numbers before either is checked for
/// sign, so `"abc"` and `"-1"` together report the numeric error.
pub fn parse_counts(large: &str, small: &str) -> Result<PredictionRequest> {
    let parse = |raw: &str| -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ClientError::Validation(NOT_A_NUMBER.to_string()))
    };
    let large = parse(large)?;
    let small = parse(small)?;
    PredictionRequest::new(large, small)
}

/// One forecast row, in the order the backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    #[serde(rename = "hari")]
    pub day_name: String,
    #[serde(rename = "tanggal")]
    pub date: String,
    #[serde(rename = "nilai")]
    pub value: Decimal,
    #[serde(rename = "defisit")]
    pub deficit: Decimal,
    #[serde(rename = "status")]
    pub status_label: String,
    #[serde(rename = "defisit_rupiah")]
    pub deficit_label: String,
}

/// Payload of a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    #[serde(rename = "target_harian")]
    pub target_daily: Decimal,
    pub avg_prediction: Decimal,
    pub avg_deficit: Decimal,
    pub predictions: Vec<WeeklyForecast>,
    #[serde(default)]
    pub current_revenue: Option<Decimal>,
    #[serde(rename = "status_saat_ini", default)]
    pub current_status: Option<String>,
}

/// Response of `POST /predict`, discriminated by its `status` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionResponse {
    Success(PredictionReport),
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

impl PredictionResponse {
    pub fn into_result(self) -> Result<PredictionReport> {
        match self {
            PredictionResponse::Success(report) => Ok(report),
            PredictionResponse::Error { message } => Err(ClientError::Rejected(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| PREDICTION_FAILED.to_string()),
            )),
        }
    }
}

/// Decodes an OK `/predict` body into the typed report.
pub fn decode_prediction(body: &str) -> Result<PredictionReport> {
    let response: PredictionResponse = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Prediction response did not match the expected shape");
        ClientError::from(e)
    })?;
    response.into_result()
}
