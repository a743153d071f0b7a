//! Browser-independent core of the livestock revenue forecast frontend.
//!
//! Holds the wire types for the prediction and history endpoints, input
//! validation, Indonesian presentation formatting, the revenue chart
//! description and the dashboard operations. The Yew frontend depends on
//! this crate and only adds HTTP, DOM and Plotly glue.

pub mod chart;
pub mod controller;
pub mod error;
pub mod format;
pub mod history;
pub mod prediction;
pub mod view;

pub use chart::{ChartHost, ChartSpec, ChartSurface};
pub use controller::{
    ForecastApi, SubmitGate, SubmitPermit, fetch_history, submit_prediction, submit_then_refresh,
};
pub use error::{ClientError, Result};
pub use history::{DEFAULT_HISTORY_DAYS, HistoryEntry, HistoryResponse, decode_history, history_endpoint};
pub use prediction::{
    PredictionReport, PredictionRequest, PredictionResponse, WeeklyForecast, decode_prediction,
    parse_counts,
};
pub use view::{Attainment, PredictionView, Trend, WeekRow};
