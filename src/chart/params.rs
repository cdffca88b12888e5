//! Fixed chart constants
//!
//! Everything the chart needs is hardcoded here. The struct is serde-derivable
//! with per-field defaults so the same values can be read from JSON later.

use serde::{Deserialize, Serialize};

/// Bold title drawn inside the plot area
pub const CHART_TITLE: &str = "Compound Interest Example";

/// Output location relative to the generator's base directory
pub const CHART_OUTPUT_PATH: &str = "static/img/compound-interest-graph.png";

/// Raster resolution
pub const CHART_DPI: u32 = 300;

/// Figure size in inches (width, height)
pub const FIGURE_SIZE_INCHES: (u32, u32) = (10, 6);

/// Pixel size of the output image
pub fn figure_pixels() -> (u32, u32) {
    (FIGURE_SIZE_INCHES.0 * CHART_DPI, FIGURE_SIZE_INCHES.1 * CHART_DPI)
}

/// Convert a typographic point size to pixels at the chart DPI
pub fn points_to_pixels(points: f64) -> u32 {
    (points * CHART_DPI as f64 / 72.0).round() as u32
}

/// Parameters for the compound interest chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    /// Fixed amount contributed every month
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// Annual interest rate as a fraction (0.07 = 7%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Time horizon in years
    #[serde(default = "default_years")]
    pub years: f64,

    /// Compounding periods per year
    #[serde(default = "default_compounds_per_year")]
    pub compounds_per_year: u32,

    /// Number of evenly spaced time points from 0 to `years`
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Upper bound of the value axis
    #[serde(default = "default_value_axis_max")]
    pub value_axis_max: f64,

    /// Extra years to the right of the horizon, room for the pointer labels
    #[serde(default = "default_x_axis_padding")]
    pub x_axis_padding: f64,

    #[serde(default = "default_year_tick_step")]
    pub year_tick_step: f64,

    #[serde(default = "default_value_tick_step")]
    pub value_tick_step: f64,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_monthly_contribution() -> f64 { 300.0 }
fn default_annual_rate() -> f64 { 0.07 }
fn default_years() -> f64 { 25.0 }
fn default_compounds_per_year() -> u32 { 12 }
fn default_samples() -> usize { 100 }
fn default_value_axis_max() -> f64 { 250_000.0 }
fn default_x_axis_padding() -> f64 { 8.0 }
fn default_year_tick_step() -> f64 { 5.0 }
fn default_value_tick_step() -> f64 { 50_000.0 }
fn default_currency_symbol() -> String { "£".to_string() }

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            monthly_contribution: default_monthly_contribution(),
            annual_rate: default_annual_rate(),
            years: default_years(),
            compounds_per_year: default_compounds_per_year(),
            samples: default_samples(),
            value_axis_max: default_value_axis_max(),
            x_axis_padding: default_x_axis_padding(),
            year_tick_step: default_year_tick_step(),
            value_tick_step: default_value_tick_step(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl ChartParams {
    /// Right edge of the x axis
    pub fn x_axis_max(&self) -> f64 {
        self.years + self.x_axis_padding
    }

    /// Rate per compounding period (r/n)
    pub fn period_rate(&self) -> f64 {
        self.annual_rate / self.compounds_per_year as f64
    }

    /// Grey subtitle, e.g. "£300/month at 7% for 25 years"
    pub fn subtitle(&self) -> String {
        format!(
            "{}{}/month at {}% for {} years",
            self.currency_symbol,
            trim_number(self.monthly_contribution),
            trim_number(self.annual_rate * 100.0),
            trim_number(self.years),
        )
    }

    /// Year ticks: 0, step, 2*step, ... up to and including `years`
    pub fn year_ticks(&self) -> Vec<f64> {
        ticks_up_to(self.years, self.year_tick_step)
    }

    /// Value ticks: 0, step, ... up to and including `value_axis_max`
    pub fn value_ticks(&self) -> Vec<f64> {
        ticks_up_to(self.value_axis_max, self.value_tick_step)
    }
}

fn ticks_up_to(max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < 0.0 {
        return vec![0.0];
    }
    let count = (max / step + 1e-9).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Format with at most two decimals, dropping trailing zeros
fn trim_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
