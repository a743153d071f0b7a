//! Revenue chart description and the owner of the live chart instance.
//!
//! [`ChartSpec`] is library-agnostic; the frontend translates it into
//! Plotly traces. [`ChartHost`] guarantees at most one live instance: every
//! render destroys the previous one first.

use crate::error::Result;
use crate::format::{format_date_label, format_rupiah, to_plot_value};
use crate::history::HistoryEntry;

pub const SERIES_NAME: &str = "Pendapatan";
pub const NO_DATA_LABEL: &str = "Tidak ada data";
pub const NO_DATA_TITLE: &str = "Belum ada data pendapatan";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub series_name: String,
    /// Set only for the no-data placeholder
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hover_text: Vec<String>,
    pub placeholder: bool,
}

impl ChartSpec {
    /// Maps history entries to one point each, in the given order.
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        if history.is_empty() {
            return Self::placeholder();
        }

        let labels = history.iter().map(|e| format_date_label(&e.date)).collect();
        let values = history.iter().map(|e| to_plot_value(e.total_revenue)).collect();
        let hover_text = history
            .iter()
            .map(|e| format!("{}: {}", SERIES_NAME, format_rupiah(e.total_revenue)))
            .collect();

        Self {
            series_name: SERIES_NAME.to_string(),
            title: None,
            labels,
            values,
            hover_text,
            placeholder: false,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            series_name: SERIES_NAME.to_string(),
            title: Some(NO_DATA_TITLE.to_string()),
            labels: vec![NO_DATA_LABEL.to_string()],
            values: vec![0.0],
            hover_text: vec![NO_DATA_TITLE.to_string()],
            placeholder: true,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A drawing target for charts (a DOM element driven by a JS library in
/// the browser, a recorder in tests).
pub trait ChartSurface {
    type Handle;

    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns the single current chart instance of a surface.
pub struct ChartHost<S: ChartSurface> {
    surface: S,
    current: Option<S::Handle>,
}

impl<S: ChartSurface> ChartHost<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Replaces the current instance with one drawn from `spec`.
    ///
    /// The previous instance is destroyed before drawing; if the draw fails
    /// the host is left without an instance.
    pub fn render(&mut self, spec: &ChartSpec) -> Result<()> {
        self.clear();
        let handle = self.surface.draw(spec)?;
        self.current = Some(handle);
        tracing::debug!(points = spec.len(), placeholder = spec.placeholder, "Chart rendered");
        Ok(())
    }

    pub fn render_history(&mut self, history: &[HistoryEntry]) -> Result<()> {
        self.render(&ChartSpec::from_history(history))
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
        }
    }

    pub fn is_present(&self) -> bool {
        self.current.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    /// Tracks which instances are alive.
    #[derive(Default)]
    struct RecordingSurface {
        next_id: usize,
        live: Vec<usize>,
        drawn: Vec<ChartSpec>,
        fail_next: bool,
    }

    impl ChartSurface for RecordingSurface {
        type Handle = usize;

        fn draw(&mut self, spec: &ChartSpec) -> Result<usize> {
            if std::mem::take(&mut self.fail_next) {
                return Err(ClientError::Render("Plotly is not loaded".to_string()));
            }
            let id = self.next_id;
            self.next_id += 1;
            self.live.push(id);
            self.drawn.push(spec.clone());
            Ok(id)
        }

        fn destroy(&mut self, handle: usize) {
            self.live.retain(|id| *id != handle);
        }
    }

    fn entry(date: &str, total: &str) -> HistoryEntry {
        HistoryEntry::new(date, Decimal::from_str(total).unwrap())
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let spec = ChartSpec::from_history(&[]);
        assert!(spec.placeholder);
        assert_eq!(spec.labels, vec![NO_DATA_LABEL.to_string()]);
        assert_eq!(spec.values, vec![0.0]);
        assert_eq!(spec.title.as_deref(), Some(NO_DATA_TITLE));
    }

    #[test]
    fn test_history_maps_to_points_in_order() {
        let spec = ChartSpec::from_history(&[entry("2024-01-01", "100"), entry("2024-01-02", "200")]);
        assert!(!spec.placeholder);
        assert_eq!(spec.title, None);
        assert_eq!(spec.labels, vec!["1/1/2024".to_string(), "2/1/2024".to_string()]);
        assert_eq!(spec.values, vec![100.0, 200.0]);
        assert_eq!(spec.hover_text[0], "Pendapatan: Rp 100");
    }

    #[test]
    fn test_input_order_is_preserved_even_when_unsorted() {
        let spec = ChartSpec::from_history(&[entry("2024-02-01", "5"), entry("2024-01-01", "7")]);
        assert_eq!(spec.values, vec![5.0, 7.0]);
    }

    #[test]
    fn test_host_starts_absent() {
        let host = ChartHost::new(RecordingSurface::default());
        assert!(!host.is_present());
    }

    #[test]
    fn test_repeated_render_keeps_one_live_instance() {
        let mut host = ChartHost::new(RecordingSurface::default());
        host.render_history(&[entry("2024-01-01", "100")]).unwrap();
        host.render_history(&[]).unwrap();
        host.render_history(&[entry("2024-01-01", "100"), entry("2024-01-02", "200")]).unwrap();

        assert!(host.is_present());
        assert_eq!(host.surface().live, vec![2]);
        assert_eq!(host.surface().drawn.len(), 3);
        assert!(host.surface().drawn[1].placeholder);
    }

    #[test]
    fn test_failed_draw_leaves_host_absent() {
        let mut host = ChartHost::new(RecordingSurface::default());
        host.render_history(&[entry("2024-01-01", "100")]).unwrap();

        host.surface.fail_next = true;
        let result = host.render_history(&[]);

        assert!(matches!(result, Err(ClientError::Render(_))));
        assert!(!host.is_present());
        assert!(host.surface().live.is_empty());
    }

    #[test]
    fn test_clear_destroys_instance() {
        let mut host = ChartHost::new(RecordingSurface::default());
        host.render(&ChartSpec::placeholder()).unwrap();
        host.clear();
        assert!(!host.is_present());
        assert!(host.surface().live.is_empty());
    }
}
