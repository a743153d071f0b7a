use yew::prelude::*;

/// Raw text of the two count fields, validated by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
    pub large: String,
    pub small: String,
}

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub on_submit: Callback<PredictionInput>,
    /// Disables the inputs while a prediction is in flight
    pub submitting: bool,
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Prediction form submitted");

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            let form_data = match web_sys::FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(err) => {
                    log::error!("Failed to read prediction form: {:?}", err);
                    return;
                }
            };

            on_submit.emit(PredictionInput {
                large: form_data.get("ternak_besar").as_string().unwrap_or_default(),
                small: form_data.get("ternak_kecil").as_string().unwrap_or_default(),
            });
        })
    };

    html! {
        <form ref={form_ref} id="prediction-form" onsubmit={on_submit} class="space-y-4">
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{"Jumlah Ternak Besar"}</span>
                </label>
                <input
                    type="text"
                    inputmode="decimal"
                    id="ternak-besar"
                    name="ternak_besar"
                    class="input input-bordered w-full"
                    placeholder="contoh: 120"
                    disabled={props.submitting}
                />
            </div>

            <div class="form-control">
                <label class="label">
                    <span class="label-text">{"Jumlah Ternak Kecil"}</span>
                </label>
                <input
                    type="text"
                    inputmode="decimal"
                    id="ternak-kecil"
                    name="ternak_kecil"
                    class="input input-bordered w-full"
                    placeholder="contoh: 80"
                    disabled={props.submitting}
                />
            </div>

            <button type="submit" class="btn btn-primary w-full" disabled={props.submitting}>
                {if props.submitting {
                    html! { <><span class="loading loading-spinner loading-sm"></span>{" Memproses..."}</> }
                } else {
                    html! { <><i class="fas fa-chart-line"></i>{" Prediksi"}</> }
                }}
            </button>
        </form>
    }
}
