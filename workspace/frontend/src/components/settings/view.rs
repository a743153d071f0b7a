use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings::{self, AppSettings};

/// Reads the settings form into a new [`AppSettings`].
fn read_form(form: &web_sys::HtmlFormElement, current: &AppSettings) -> Result<AppSettings, String> {
    let form_data = web_sys::FormData::new_with_form(form)
        .map_err(|e| format!("Gagal membaca formulir: {:?}", e))?;
    current.with_form_fields(|name| form_data.get(name).as_string().unwrap_or_default())
}

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let form_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>();
    let current = settings::get_settings();

    let on_submit = {
        let form_ref = form_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };

            let result = read_form(&form, &settings::get_settings()).and_then(|updated| {
                updated
                    .save_to_storage()
                    .map_err(|e| format!("Gagal menyimpan pengaturan: {:?}", e))?;
                Ok(updated)
            });

            match result {
                Ok(updated) => {
                    log::info!("Settings saved: {:?}", updated);
                    settings::update_settings(|s| *s = updated);
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_success("Pengaturan disimpan".to_string());
                    }
                }
                Err(err) => {
                    log::warn!("Settings rejected: {}", err);
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_error(err);
                    }
                }
            }
        })
    };

    let level = current.log_level.to_string().to_lowercase();

    html! {
        <div class="card bg-base-100 shadow max-w-2xl">
            <div class="card-body">
                <h2 class="card-title">{"Pengaturan Koneksi"}</h2>
                <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-4">
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Alamat API"}</span></label>
                        <input
                            type="text"
                            name="api_base_url"
                            placeholder="Kosongkan untuk memakai server halaman ini"
                            class="input input-bordered w-full"
                            value={current.api_base_url.clone()}
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Rentang Riwayat (hari)"}</span></label>
                            <input
                                type="text"
                                inputmode="numeric"
                                name="history_days"
                                class="input input-bordered w-full"
                                value={current.history_days.to_string()}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Jeda Penyegaran Grafik (ms)"}</span></label>
                            <input
                                type="text"
                                inputmode="numeric"
                                name="history_refresh_delay_ms"
                                class="input input-bordered w-full"
                                value={current.history_refresh_delay_ms.to_string()}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Durasi Notifikasi (ms)"}</span></label>
                        <input
                            type="text"
                            inputmode="numeric"
                            name="toast_duration_ms"
                            class="input input-bordered w-full"
                            value={current.toast_duration_ms.to_string()}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Level Log"}</span>
                            <span class="label-text-alt">{"Berlaku setelah halaman dimuat ulang"}</span>
                        </label>
                        <select name="log_level" class="select select-bordered w-full">
                            { for ["error", "warn", "info", "debug", "trace"].iter().map(|option| html! {
                                <option value={*option} selected={*option == level}>{*option}</option>
                            }) }
                        </select>
                    </div>

                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">{"Simpan"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
