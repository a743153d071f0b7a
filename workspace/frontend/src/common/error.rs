use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Failure panel shown in place of a prediction result
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="bg-red-100 text-red-700 p-4 rounded-md flex items-start gap-3" role="alert">
            <i class="fas fa-exclamation-circle mt-1"></i>
            <span>{format!("Gagal melakukan prediksi: {}", props.message)}</span>
        </div>
    }
}
