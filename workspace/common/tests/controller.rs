use std::cell::RefCell;
use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use ternak_common::{
    Attainment, ChartHost, ChartSpec, ChartSurface, ClientError, ForecastApi, HistoryEntry,
    PredictionReport, PredictionRequest, PredictionView, Result, SubmitGate, Trend,
    WeeklyForecast, fetch_history, submit_prediction, submit_then_refresh,
};

/// Records every call and answers with canned results.
struct MockApi {
    predict_calls: RefCell<Vec<PredictionRequest>>,
    history_calls: RefCell<Vec<u32>>,
    prediction: Result<PredictionReport>,
    history: Result<Vec<HistoryEntry>>,
    /// Gate state seen by each `predict` call
    gate: Option<SubmitGate>,
    gate_busy_during_predict: RefCell<Vec<bool>>,
}

impl MockApi {
    fn new(prediction: Result<PredictionReport>, history: Result<Vec<HistoryEntry>>) -> Self {
        Self {
            predict_calls: RefCell::new(Vec::new()),
            history_calls: RefCell::new(Vec::new()),
            prediction,
            history,
            gate: None,
            gate_busy_during_predict: RefCell::new(Vec::new()),
        }
    }

    fn watching(mut self, gate: &SubmitGate) -> Self {
        self.gate = Some(gate.clone());
        self
    }
}

#[async_trait(?Send)]
impl ForecastApi for MockApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionReport> {
        self.predict_calls.borrow_mut().push(*request);
        if let Some(gate) = &self.gate {
            self.gate_busy_during_predict.borrow_mut().push(gate.is_busy());
        }
        self.prediction.clone()
    }

    async fn revenue_history(&self, days: u32) -> Result<Vec<HistoryEntry>> {
        self.history_calls.borrow_mut().push(days);
        self.history.clone()
    }
}

#[derive(Default)]
struct CountingSurface {
    live: usize,
    last: Option<ChartSpec>,
}

impl ChartSurface for CountingSurface {
    type Handle = ();

    fn draw(&mut self, spec: &ChartSpec) -> Result<()> {
        self.live += 1;
        self.last = Some(spec.clone());
        Ok(())
    }

    fn destroy(&mut self, _handle: ()) {
        self.live -= 1;
    }
}

fn sample_report(avg_prediction: i64, avg_deficit: i64) -> PredictionReport {
    PredictionReport {
        target_daily: Decimal::from(476190),
        avg_prediction: Decimal::from(avg_prediction),
        avg_deficit: Decimal::from(avg_deficit),
        predictions: vec![WeeklyForecast {
            day_name: "Selasa".to_string(),
            date: "2024-01-02".to_string(),
            value: Decimal::from(476690),
            deficit: Decimal::from(-500),
            status_label: "TERCAPAI".to_string(),
            deficit_label: "(+ Rp 500)".to_string(),
        }],
        current_revenue: None,
        current_status: None,
    }
}

fn entry(date: &str, total: &str) -> HistoryEntry {
    HistoryEntry::new(date, Decimal::from_str(total).unwrap())
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() {
    let api = MockApi::new(Ok(sample_report(1, 1)), Ok(vec![]));

    for (large, small) in [("abc", "1"), ("1", ""), ("-1", "2"), ("3", "-0.1")] {
        let err = submit_prediction(&api, large, small).await.unwrap_err();
        assert!(err.is_validation(), "{large:?} {small:?} -> {err:?}");
    }

    assert!(api.predict_calls.borrow().is_empty());
}

#[tokio::test]
async fn valid_input_issues_exactly_one_request_with_the_form_values() {
    let api = MockApi::new(Ok(sample_report(300000, 176190)), Ok(vec![]));

    let view = submit_prediction(&api, "12", "7.5").await.expect("prediction succeeds");

    let calls = api.predict_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], PredictionRequest::new(12.0, 7.5).unwrap());
    assert_eq!(view.weeks.len(), 1);
    assert_eq!(view.attainment, Attainment::Deficit);
}

#[tokio::test]
async fn negative_average_renders_downward_with_absolute_value() {
    let api = MockApi::new(Ok(sample_report(-500, -200)), Ok(vec![]));

    let view = submit_prediction(&api, "1", "1").await.unwrap();

    assert_eq!(view.trend, Trend::Down);
    assert_eq!(view.average_text(), "↓ Rp 500");
    assert_eq!(view.status_text(), "TERCAPAI (+ Rp 200)");
}

#[tokio::test]
async fn backend_errors_are_passed_through() {
    let api = MockApi::new(
        Err(ClientError::http(400, Some("Gagal mendapatkan data sequence".to_string()))),
        Ok(vec![]),
    );

    let err = submit_prediction(&api, "1", "1").await.unwrap_err();

    assert_eq!(err.to_string(), "Gagal mendapatkan data sequence");
    assert_eq!(api.predict_calls.borrow().len(), 1);
}

#[tokio::test]
async fn history_failure_keeps_the_previous_chart() {
    let mut host = ChartHost::new(CountingSurface::default());
    let good = MockApi::new(Ok(sample_report(1, 1)), Ok(vec![entry("2024-01-01", "100")]));
    let broken = MockApi::new(
        Ok(sample_report(1, 1)),
        Err(ClientError::Transport("connection refused".to_string())),
    );

    if let Some(history) = fetch_history(&good, 30).await {
        host.render_history(&history).unwrap();
    }
    if let Some(history) = fetch_history(&broken, 30).await {
        host.render_history(&history).unwrap();
    }

    assert!(host.is_present());
    assert_eq!(host.surface().live, 1);
    assert_eq!(host.surface().last.as_ref().unwrap().values, vec![100.0]);
    assert_eq!(*broken.history_calls.borrow(), vec![30]);
}

#[tokio::test]
async fn empty_history_renders_placeholder() {
    let api = MockApi::new(Ok(sample_report(1, 1)), Ok(vec![]));
    let mut host = ChartHost::new(CountingSurface::default());

    let history = fetch_history(&api, 7).await.expect("empty history is a success");
    host.render_history(&history).unwrap();

    assert!(host.surface().last.as_ref().unwrap().placeholder);
    assert_eq!(*api.history_calls.borrow(), vec![7]);
}

/// Collects everything `submit_then_refresh` reports, in order.
#[derive(Default)]
struct Timeline {
    events: RefCell<Vec<String>>,
    published: RefCell<Option<Result<PredictionView>>>,
}

impl Timeline {
    fn publish(&self, outcome: Result<PredictionView>) {
        self.events.borrow_mut().push("published".to_string());
        *self.published.borrow_mut() = Some(outcome);
    }

    async fn sleep(&self) {
        self.events.borrow_mut().push("slept".to_string());
    }
}

#[tokio::test]
async fn successful_prediction_refreshes_history_after_the_delay() {
    let gate = SubmitGate::default();
    let api = MockApi::new(Ok(sample_report(300000, 176190)), Ok(vec![entry("2024-01-01", "100")]))
        .watching(&gate);
    let timeline = Timeline::default();

    let permit = gate.try_acquire().expect("gate starts open");
    let history = submit_then_refresh(
        permit,
        &api,
        "12",
        "7",
        14,
        |outcome| timeline.publish(outcome),
        || timeline.sleep(),
    )
    .await;

    assert_eq!(*timeline.events.borrow(), vec!["published", "slept"]);
    assert_eq!(history, Some(vec![entry("2024-01-01", "100")]));
    assert_eq!(*api.history_calls.borrow(), vec![14]);
    assert!(timeline.published.borrow().as_ref().unwrap().is_ok());
}

#[tokio::test]
async fn failed_prediction_never_refreshes_history() {
    let cases = [
        (MockApi::new(Ok(sample_report(1, 1)), Ok(vec![])), "abc"),
        (
            MockApi::new(Err(ClientError::http(500, None)), Ok(vec![])),
            "1",
        ),
    ];

    for (api, large) in cases {
        let gate = SubmitGate::default();
        let timeline = Timeline::default();

        let history = submit_then_refresh(
            gate.try_acquire().unwrap(),
            &api,
            large,
            "1",
            30,
            |outcome| timeline.publish(outcome),
            || timeline.sleep(),
        )
        .await;

        assert_eq!(history, None);
        assert_eq!(*timeline.events.borrow(), vec!["published"]);
        assert!(timeline.published.borrow().as_ref().unwrap().is_err());
        assert!(api.history_calls.borrow().is_empty());
        assert!(!gate.is_busy());
    }
}

#[tokio::test]
async fn failed_refresh_leaves_the_published_prediction_alone() {
    let api = MockApi::new(
        Ok(sample_report(-500, -200)),
        Err(ClientError::Transport("connection refused".to_string())),
    );
    let gate = SubmitGate::default();
    let timeline = Timeline::default();

    let history = submit_then_refresh(
        gate.try_acquire().unwrap(),
        &api,
        "1",
        "1",
        30,
        |outcome| timeline.publish(outcome),
        || timeline.sleep(),
    )
    .await;

    assert_eq!(history, None);
    assert_eq!(*api.history_calls.borrow(), vec![30]);
    assert_eq!(timeline.events.borrow().len(), 2);
    let published = timeline.published.borrow();
    let view = published.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(view.average_text(), "↓ Rp 500");
    assert_eq!(view.status_text(), "TERCAPAI (+ Rp 200)");
}

#[tokio::test]
async fn second_submit_is_ignored_while_one_is_in_flight() {
    let gate = SubmitGate::default();
    let api = MockApi::new(Ok(sample_report(1, 1)), Ok(vec![])).watching(&gate);
    let timeline = Timeline::default();

    let permit = gate.try_acquire().unwrap();
    assert!(gate.try_acquire().is_none());

    submit_then_refresh(
        permit,
        &api,
        "1",
        "1",
        30,
        |outcome| timeline.publish(outcome),
        || async {
            // Released once the prediction is published
            assert!(!gate.is_busy());
        },
    )
    .await;

    assert_eq!(*api.gate_busy_during_predict.borrow(), vec![true]);
    assert_eq!(api.predict_calls.borrow().len(), 1);
    assert!(gate.try_acquire().is_some());
}
