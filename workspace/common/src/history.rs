use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Default window requested from `GET /revenue_history`.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// A single recorded day of revenue.
///
/// `total_revenue` accepts either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Tanggal")]
    pub date: String,
    #[serde(rename = "Total_Pendapatan")]
    pub total_revenue: Decimal,
}

impl HistoryEntry {
    pub fn new(date: impl Into<String>, total_revenue: Decimal) -> Self {
        Self {
            date: date.into(),
            total_revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HistoryResponse {
    Success {
        #[serde(default)]
        history: Vec<HistoryEntry>,
    },
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

impl HistoryResponse {
    pub fn into_result(self) -> Result<Vec<HistoryEntry>> {
        match self {
            HistoryResponse::Success { history } => Ok(history),
            HistoryResponse::Error { message } => Err(ClientError::Rejected(
                message.unwrap_or_else(|| "Riwayat pendapatan tidak tersedia".to_string()),
            )),
        }
    }
}

/// Decodes an OK `/revenue_history` body.
pub fn decode_history(body: &str) -> Result<Vec<HistoryEntry>> {
    let response: HistoryResponse = serde_json::from_str(body)?;
    response.into_result()
}

/// Path and query for a history request.
pub fn history_endpoint(days: u32) -> String {
    format!("/revenue_history?days={}", days)
}
