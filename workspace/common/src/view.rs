//! Render-ready view of a prediction report.
//!
//! Everything the result panel shows is computed here so the component only
//! lays out strings and CSS classes.

use rust_decimal::Decimal;

use crate::format::format_rupiah;
use crate::prediction::{PredictionReport, WeeklyForecast};

/// Direction of the average prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn of(value: Decimal) -> Self {
        if value.is_sign_negative() && !value.is_zero() {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-green-600",
            Trend::Down => "text-red-600",
        }
    }
}

/// Whether the target is met. A positive deficit means it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attainment {
    Deficit,
    Met,
}

impl Attainment {
    pub fn of_deficit(deficit: Decimal) -> Self {
        if deficit > Decimal::ZERO {
            Attainment::Deficit
        } else {
            Attainment::Met
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attainment::Deficit => "KURANG",
            Attainment::Met => "TERCAPAI",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Attainment::Deficit => "-",
            Attainment::Met => "+",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Attainment::Deficit => "text-red-600",
            Attainment::Met => "text-green-600",
        }
    }

    pub fn muted_class(&self) -> &'static str {
        match self {
            Attainment::Deficit => "text-red-500",
            Attainment::Met => "text-green-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    /// `Selasa, 2024-01-02`
    pub heading: String,
    pub amount: String,
    /// Backend-supplied status and deficit text, e.g. `KURANG (- Rp 236,190)`
    pub note: String,
    pub attainment: Attainment,
}

impl From<&WeeklyForecast> for WeekRow {
    fn from(week: &WeeklyForecast) -> Self {
        Self {
            heading: format!("{}, {}", week.day_name, week.date),
            amount: format_rupiah(week.value.abs()),
            note: format!("{} {}", week.status_label, week.deficit_label)
                .trim()
                .to_string(),
            attainment: Attainment::of_deficit(week.deficit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub target_daily: String,
    pub current_revenue: Option<String>,
    pub trend: Trend,
    /// Absolute average prediction
    pub average: String,
    pub attainment: Attainment,
    /// Absolute average deficit
    pub deficit: String,
    pub weeks: Vec<WeekRow>,
}

impl PredictionView {
    /// `KURANG (- Rp 1.000)`
    pub fn status_text(&self) -> String {
        format!(
            "{} ({} {})",
            self.attainment.label(),
            self.attainment.sign(),
            self.deficit
        )
    }

    /// `↓ Rp 500`
    pub fn average_text(&self) -> String {
        format!("{} {}", self.trend.arrow(), self.average)
    }
}

impl From<&PredictionReport> for PredictionView {
    fn from(report: &PredictionReport) -> Self {
        Self {
            target_daily: format_rupiah(report.target_daily),
            current_revenue: report.current_revenue.map(format_rupiah),
            trend: Trend::of(report.avg_prediction),
            average: format_rupiah(report.avg_prediction.abs()),
            attainment: Attainment::of_deficit(report.avg_deficit),
            deficit: format_rupiah(report.avg_deficit.abs()),
            weeks: report.predictions.iter().map(WeekRow::from).collect(),
        }
    }
}
