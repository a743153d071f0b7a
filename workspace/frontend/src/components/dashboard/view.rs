use yew::prelude::*;
use ternak_common::{PredictionView, SubmitGate, submit_then_refresh};

use crate::api_client::HttpForecastApi;
use crate::components::prediction::{PredictionForm, PredictionInput, PredictionResult};
use crate::components::revenue::RevenueChart;
use crate::common::history_hook::use_revenue_history;
use crate::hooks::FetchState;
use crate::settings;

/// The prediction form, its result panel and the revenue history chart.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let prediction = use_state(|| FetchState::<PredictionView>::NotStarted);
    let submitting = use_state(|| false);
    let gate = use_state(SubmitGate::default);
    let history = use_revenue_history();

    let on_submit = {
        let prediction = prediction.clone();
        let submitting = submitting.clone();
        let history = history.clone();
        let gate = (*gate).clone();

        Callback::from(move |input: PredictionInput| {
            let Some(permit) = gate.try_acquire() else {
                log::debug!("Prediction already in flight, ignoring submit");
                return;
            };

            let prediction = prediction.clone();
            let submitting = submitting.clone();
            let history = history.clone();
            let settings = settings::get_settings();

            submitting.set(true);
            prediction.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let delay_ms = settings.history_refresh_delay_ms;

                // The backend appends the new entry while answering; the
                // chart reloads shortly afterwards.
                let refreshed = submit_then_refresh(
                    permit,
                    &HttpForecastApi,
                    &input.large,
                    &input.small,
                    settings.history_days,
                    |outcome| {
                        submitting.set(false);
                        match outcome {
                            Ok(view) => {
                                log::info!("Prediction rendered with {} weekly rows", view.weeks.len());
                                prediction.set(FetchState::Success(view));
                            }
                            Err(err) => {
                                log::error!("Error: {}", err);
                                prediction.set(FetchState::Error(err.to_string()));
                            }
                        }
                    },
                    || async move {
                        log::debug!("Refreshing revenue history in {} ms", delay_ms);
                        if delay_ms > 0 {
                            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                        }
                    },
                )
                .await;

                if let Some(entries) = refreshed {
                    log::debug!("Revenue history refreshed with {} entries", entries.len());
                    history.set(Some(entries));
                }
            });
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Input Data Ternak"}</h3>
                    <PredictionForm on_submit={on_submit} submitting={*submitting} />
                    <div class="mt-4">
                        <PredictionResult state={(*prediction).clone()} />
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow lg:col-span-2">
                <div class="card-body">
                    <div class="flex justify-between items-center">
                        <h3 class="card-title">{"Riwayat Pendapatan"}</h3>
                        <span class="text-sm text-gray-500">
                            {format!("{} hari terakhir", settings::get_settings().history_days)}
                        </span>
                    </div>
                    <RevenueChart history={(*history).clone()} />
                </div>
            </div>
        </div>
    }
}
