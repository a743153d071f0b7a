use yew::prelude::*;
use ternak_common::{PredictionView, WeekRow};

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct PredictionResultProps {
    pub state: FetchState<PredictionView>,
}

#[function_component(PredictionResult)]
pub fn prediction_result(props: &PredictionResultProps) -> Html {
    let body = match &props.state {
        FetchState::NotStarted => html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-cow text-4xl mb-4 opacity-50"></i>
                <p>{"Masukkan jumlah ternak untuk melihat prediksi pendapatan."}</p>
            </div>
        },
        FetchState::Loading => html! { <Loading text={Some("Menghitung prediksi...".to_string())} /> },
        FetchState::Error(message) => html! { <ErrorDisplay message={message.clone()} /> },
        FetchState::Success(view) => render_prediction(view),
    };

    html! {
        <div id="prediction-results">{body}</div>
    }
}

fn render_prediction(view: &PredictionView) -> Html {
    html! {
        <div class="bg-green-100 text-green-800 p-4 rounded-md">
            <h3 class="font-bold mb-2">{"Prediksi Pendapatan"}</h3>

            <p class="mb-2">
                {"Target Harian: "}
                <span class="font-bold">{&view.target_daily}</span>
            </p>

            {if let Some(current) = &view.current_revenue {
                html! {
                    <p class="mb-2">
                        {"Pendapatan Saat Ini: "}
                        <span class="font-bold">{current}</span>
                    </p>
                }
            } else {
                html! {}
            }}

            <p class="flex items-center gap-2 mb-2">
                {"Rata-rata Prediksi: "}
                <span class={classes!(view.trend.text_class(), "font-bold")}>
                    {view.average_text()}
                </span>
            </p>
            <p class="mb-4">
                {"Status: "}
                <span class={classes!("font-bold", view.attainment.text_class())}>
                    {view.status_text()}
                </span>
            </p>

            <h4 class="mt-4 font-semibold">{"Prediksi 4 Minggu Kedepan:"}</h4>
            <div class="grid grid-cols-1 gap-2 mt-2">
                { for view.weeks.iter().map(render_week) }
            </div>
        </div>
    }
}

fn render_week(week: &WeekRow) -> Html {
    html! {
        <div class="flex items-center justify-between border-b py-2">
            <span>{&week.heading}</span>
            <div class="text-right">
                <span class={classes!(week.attainment.text_class(), "font-bold")}>
                    {&week.amount}
                </span>
                <br />
                <span class={classes!("text-sm", week.attainment.muted_class())}>
                    {&week.note}
                </span>
            </div>
        </div>
    }
}
