use plotly::common::{Fill, HoverInfo, Line, LineShape, Marker, Mode};
use plotly::Scatter;
use serde::Serialize;
use ternak_common::{ChartHost, ChartSpec, ChartSurface, ClientError, HistoryEntry};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::common::loading::Loading;

pub const CHART_ID: &str = "revenue-chart";

const LINE_COLOR: &str = "#3B82F6";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;
}

/// Plotly instances are identified by the id of the element they live in.
pub struct PlotHandle {
    div_id: String,
}

/// Draws into a fixed DOM element through the global `Plotly` object.
pub struct PlotlySurface {
    div_id: String,
}

impl PlotlySurface {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self { div_id: div_id.into() }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ClientError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ClientError::Render(e.to_string()))
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Render(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Points are placed by index so repeated dates stay separate points; the
/// date labels are applied as tick text.
fn build_trace(spec: &ChartSpec) -> Box<Scatter<usize, f64>> {
    let positions: Vec<usize> = (0..spec.len()).collect();
    let hover: Vec<String> = spec
        .labels
        .iter()
        .zip(&spec.hover_text)
        .map(|(label, text)| format!("{}<br>{}", label, text))
        .collect();

    Scatter::new(positions, spec.values.clone())
        .name(&spec.series_name)
        .mode(Mode::LinesMarkers)
        .fill(Fill::ToZeroY)
        .fill_color("rgba(59, 130, 246, 0.1)")
        .line(Line::new().color(LINE_COLOR).width(3.0).shape(LineShape::Spline))
        .marker(
            Marker::new()
                .size(12)
                .color(LINE_COLOR)
                .line(Line::new().color("#fff").width(2.0)),
        )
        .text_array(hover)
        .hover_info(HoverInfo::Text)
}

fn build_layout(spec: &ChartSpec) -> serde_json::Value {
    let positions: Vec<usize> = (0..spec.len()).collect();
    let margin_top = if spec.title.is_some() { 50 } else { 20 };

    let mut layout = serde_json::json!({
        "margin": {"t": margin_top, "r": 10, "l": 70, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "separators": ",.",
        "showlegend": true,
        "legend": {"orientation": "h", "x": 0, "y": 1.12, "font": {"size": 13}},
        "hoverlabel": {"bgcolor": "rgba(0, 0, 0, 0.8)", "font": {"size": 12, "color": "#fff"}},
        "xaxis": {
            "showgrid": false,
            "tickmode": "array",
            "tickvals": positions,
            "ticktext": spec.labels,
            "tickfont": {"size": 12}
        },
        "yaxis": {
            "rangemode": "tozero",
            "gridcolor": "rgba(0, 0, 0, 0.1)",
            "tickprefix": "Rp ",
            "separatethousands": true,
            "tickfont": {"size": 12}
        }
    });

    if let Some(text) = &spec.title {
        layout["title"] = serde_json::json!({"text": text, "font": {"size": 16}});
    }

    layout
}

impl ChartSurface for PlotlySurface {
    type Handle = PlotHandle;

    fn draw(&mut self, spec: &ChartSpec) -> Result<PlotHandle, ClientError> {
        log::debug!("Drawing revenue chart with {} points", spec.len());

        let data = js_sys::Array::new();
        data.push(&to_js(&build_trace(spec))?);
        let layout = to_js(&build_layout(spec))?;
        let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;

        new_plot(&self.div_id, data.into(), layout, config).map_err(js_error)?;

        Ok(PlotHandle {
            div_id: self.div_id.clone(),
        })
    }

    fn destroy(&mut self, handle: PlotHandle) {
        log::trace!("Destroying chart in #{}", handle.div_id);
        if let Err(err) = purge(&handle.div_id) {
            log::warn!("Failed to purge chart #{}: {:?}", handle.div_id, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    /// `None` until the first history load succeeds
    pub history: Option<Vec<HistoryEntry>>,
}

#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let host = use_mut_ref(|| ChartHost::new(PlotlySurface::new(CHART_ID)));

    {
        let host = host.clone();
        use_effect_with(props.history.clone(), move |history| {
            if let Some(history) = history {
                if let Err(err) = host.borrow_mut().render_history(history) {
                    log::error!("Error rendering chart: {}", err);
                }
            }
            || ()
        });
    }

    // Tear the instance down with the component
    {
        let host = host.clone();
        use_effect_with((), move |_| {
            move || host.borrow_mut().clear()
        });
    }

    html! {
        <div class="relative" style="height: 400px;">
            <div id={CHART_ID} style="width: 100%; height: 100%;"></div>
            {if props.history.is_none() {
                html! {
                    <div class="absolute inset-0 flex items-center justify-center">
                        <Loading text={Some("Memuat riwayat pendapatan...".to_string())} />
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
