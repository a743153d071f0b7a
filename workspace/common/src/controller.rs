//! Operations behind the dashboard: submitting a prediction and loading the
//! revenue history. Transport is abstracted by [`ForecastApi`].

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::Result;
use crate::history::HistoryEntry;
use crate::prediction::{PredictionReport, PredictionRequest, parse_counts};
use crate::view::PredictionView;

/// Backend calls used by the dashboard.
///
/// Futures are not `Send`: the browser runs them on its single event loop.
#[async_trait(?Send)]
pub trait ForecastApi {
    /// `POST /predict`
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionReport>;

    /// `GET /revenue_history?days=N`
    async fn revenue_history(&self, days: u32) -> Result<Vec<HistoryEntry>>;
}

/// Validates the raw form fields, then issues exactly one prediction call.
///
/// Invalid input returns a validation error without touching `api`.
pub async fn submit_prediction<A>(api: &A, large: &str, small: &str) -> Result<PredictionView>
where
    A: ForecastApi + ?Sized,
{
    let request = parse_counts(large, small).inspect_err(|e| {
        tracing::info!(error = %e, "Prediction input rejected");
    })?;

    tracing::debug!(
        large = request.large_livestock_count(),
        small = request.small_livestock_count(),
        "Submitting prediction"
    );

    let report = api.predict(&request).await.inspect_err(|e| {
        tracing::error!(error = %e, "Prediction failed");
    })?;

    tracing::info!(weeks = report.predictions.len(), "Prediction received");
    Ok(PredictionView::from(&report))
}

/// Allows one prediction submission at a time.
///
/// Clones share the same flag, so a gate can be handed to every callback of a
/// component.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    busy: Rc<Cell<bool>>,
}

impl SubmitGate {
    /// Claims the gate, or returns `None` while another submission holds it.
    pub fn try_acquire(&self) -> Option<SubmitPermit> {
        if self.busy.replace(true) {
            return None;
        }
        Some(SubmitPermit {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Held for the duration of one submission; dropping it reopens the gate.
#[derive(Debug)]
pub struct SubmitPermit {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Runs one dashboard submission.
///
/// The outcome goes to `publish` as soon as the prediction settles, and the
/// permit is released at that point. Only a successful prediction continues:
/// it waits for `sleep()` and then reloads `history_days` of revenue history.
/// A failed reload yields `None` and never reaches `publish`.
pub async fn submit_then_refresh<A, P, F, S>(
    permit: SubmitPermit,
    api: &A,
    large: &str,
    small: &str,
    history_days: u32,
    publish: P,
    sleep: F,
) -> Option<Vec<HistoryEntry>>
where
    A: ForecastApi + ?Sized,
    P: FnOnce(Result<PredictionView>),
    F: FnOnce() -> S,
    S: Future<Output = ()>,
{
    let outcome = submit_prediction(api, large, small).await;
    let succeeded = outcome.is_ok();
    drop(permit);
    publish(outcome);

    if !succeeded {
        return None;
    }

    tracing::debug!(history_days, "Scheduling revenue history refresh");
    sleep().await;
    fetch_history(api, history_days).await
}

/// Loads the revenue history. Failures are logged and yield `None` so the
/// caller keeps whatever chart it already shows.
pub async fn fetch_history<A>(api: &A, days: u32) -> Option<Vec<HistoryEntry>>
where
    A: ForecastApi + ?Sized,
{
    match api.revenue_history(days).await {
        Ok(history) => {
            tracing::debug!(entries = history.len(), days, "Revenue history loaded");
            Some(history)
        }
        Err(e) => {
            tracing::warn!(error = %e, days, "Error fetching revenue history");
            None
        }
    }
}
