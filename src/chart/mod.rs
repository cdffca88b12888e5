//! Compound interest chart generator
//!
//! Computes contributed principal, simple interest and compound interest over
//! the horizon and renders them as a stacked-area PNG.

mod params;
mod series;
mod render;

pub use params::{
    figure_pixels, points_to_pixels, ChartParams, CHART_DPI, CHART_OUTPUT_PATH, CHART_TITLE,
    FIGURE_SIZE_INCHES,
};
pub use series::{
    compound_total, contributed, linspace, simple_total, GrowthSeries, NEGATIVE_LAYER_TOLERANCE,
};
pub use render::{
    annotations, band_bounds, chart_font, dpi_to_pixels_per_meter, draw_chart, format_currency,
    render_chart, tick_length, write_png, Annotation, PlotFrame,
};

use crate::error::GeneratorError;
use std::fs;
use std::path::{Path, PathBuf};

/// Create the parent directory of `output_path` if it does not exist yet
pub fn ensure_output_dir(output_path: &Path) -> Result<(), GeneratorError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }
    Ok(())
}

/// Render the chart with the default constants under `base_dir`
pub fn generate_chart(base_dir: &Path) -> Result<PathBuf, GeneratorError> {
    generate_chart_with(base_dir, &ChartParams::default())
}

/// Render the chart with explicit parameters under `base_dir`
///
/// Returns the path of the written PNG.
pub fn generate_chart_with(base_dir: &Path, params: &ChartParams) -> Result<PathBuf, GeneratorError> {
    let output_path = base_dir.join(CHART_OUTPUT_PATH);
    ensure_output_dir(&output_path)?;

    let series = GrowthSeries::compute(params)?;
    render_chart(&series, params, &output_path)?;

    log::info!(
        "Chart written to {} ({}x{} px at {} DPI)",
        output_path.display(),
        figure_pixels().0,
        figure_pixels().1,
        CHART_DPI
    );
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("docs_assets_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_ensure_output_dir_creates_missing_dirs() {
        let base = scratch_dir("chart_dir");
        let output_path = base.join(CHART_OUTPUT_PATH);
        assert!(!output_path.parent().unwrap().exists());

        ensure_output_dir(&output_path).unwrap();
        assert!(output_path.parent().unwrap().is_dir());

        // Idempotent
        ensure_output_dir(&output_path).unwrap();

        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_invalid_params_fail_before_rendering() {
        let base = scratch_dir("chart_invalid");
        let params = ChartParams {
            years: 60.0,
            ..ChartParams::default()
        };
        let err = generate_chart_with(&base, &params).unwrap_err();
        assert!(matches!(err, GeneratorError::ValueAxisOverflow { .. }));
        assert!(!base.join(CHART_OUTPUT_PATH).exists());

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_generate_chart_creates_directory() {
        let base = scratch_dir("chart_generate");
        let path = generate_chart(&base).unwrap();
        assert_eq!(path, base.join("static/img/compound-interest-graph.png"));
        assert!(path.is_file());

        let bytes = fs::read(&path).unwrap();
        let reader = png::Decoder::new(&bytes[..]).read_info().unwrap();
        let dims = reader.info().pixel_dims.expect("pHYs chunk");
        assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
        assert_eq!(dims.unit, png::Unit::Meter);

        fs::remove_dir_all(&base).unwrap();
    }
}
