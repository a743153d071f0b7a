pub mod chart;

pub use chart::RevenueChart;
