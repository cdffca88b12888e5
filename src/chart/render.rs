//! Stacked-area rendering of a [`GrowthSeries`] with plotters
//!
//! The chart is drawn into an RGB buffer and encoded with `png` so the file
//! carries a pHYs chunk for the chart DPI. Axes, ticks and tick labels are
//! drawn by hand from [`ChartParams::year_ticks`] and
//! [`ChartParams::value_ticks`] so they land exactly on those values.

use super::params::{figure_pixels, points_to_pixels, ChartParams, CHART_DPI, CHART_TITLE};
use super::series::GrowthSeries;
use crate::error::GeneratorError;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Band colors, bottom layer first
const LAYER_COLORS: [RGBColor; 3] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
];
const LAYER_OPACITY: f64 = 0.8;
const SUBTITLE_GREY: RGBColor = RGBColor(128, 128, 128);
const FONT: &str = "sans-serif";

/// Pointer label drawn to the right of the stack
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Lines of text, top to bottom
    pub lines: &'static [&'static str],
    pub font_points: f64,
    /// Arrow tip, in data coordinates
    pub target: (f64, f64),
    /// Left edge and vertical center of the text, in data coordinates
    pub text_at: (f64, f64),
}

/// Pixel rectangle of the plot area and the data range it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    x_max: f64,
    y_max: f64,
}

impl PlotFrame {
    /// Frame inside the full figure, leaving room for the title above,
    /// the year axis below and the value labels on the right
    pub fn new(params: &ChartParams) -> Self {
        let (width, height) = figure_pixels();
        Self {
            left: points_to_pixels(20.0) as i32,
            top: points_to_pixels(50.0) as i32,
            right: width as i32 - points_to_pixels(72.0) as i32,
            bottom: height as i32 - points_to_pixels(40.0) as i32,
            x_max: params.x_axis_max(),
            y_max: params.value_axis_max,
        }
    }

    /// Map data coordinates (years, value) to backend pixels
    pub fn to_pixel(&self, (x, y): (f64, f64)) -> (i32, i32) {
        let px = self.left as f64 + x / self.x_max * (self.right - self.left) as f64;
        let py = self.bottom as f64 - y / self.y_max * (self.bottom - self.top) as f64;
        (px.round() as i32, py.round() as i32)
    }
}

/// Tick mark length, shared by both axes
pub fn tick_length() -> i32 {
    points_to_pixels(3.5) as i32
}

/// "£50,000" style label; fractional pounds are truncated
pub fn format_currency(value: f64, symbol: &str) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Lower and upper edge of each band, bottom layer first
pub fn band_bounds(series: &GrowthSeries) -> Vec<(Vec<f64>, Vec<f64>)> {
    let mut lower = vec![0.0; series.len()];
    let mut bands = Vec::with_capacity(3);
    for layer in series.layers() {
        let upper: Vec<f64> = lower.iter().zip(layer).map(|(l, v)| l + v).collect();
        bands.push((lower, upper.clone()));
        lower = upper;
    }
    bands
}

/// Pointer labels for the three layers, each aimed at the middle of its band
pub fn annotations(series: &GrowthSeries, params: &ChartParams) -> Vec<Annotation> {
    let idx = series.annotation_index();
    let target_x = params.years - 1.0;
    let label_x = params.years + 1.0;

    let principal = series.principal[idx];
    let simple = series.simple_interest[idx];
    let compound = series.compound_interest[idx];

    let mid_heights = [
        principal / 2.0,
        principal + simple / 2.0,
        principal + simple + compound / 2.0,
    ];
    let labels: [(&'static [&'static str], f64); 3] = [
        (&["TOTAL", "CONTRIBUTED"][..], 10.0),
        (&["INTEREST", "(NO COMPOUNDING)"][..], 10.0),
        (&["COMPOUND", "INTEREST"][..], 12.0),
    ];

    labels
        .iter()
        .zip(mid_heights)
        .map(|(&(lines, font_points), y)| Annotation {
            lines,
            font_points,
            target: (target_x, y),
            text_at: (label_x, y),
        })
        .collect()
}

/// Sans-serif font at a point size.
///
/// The weight has to be chosen here: `FontDesc::style` keeps the face that
/// was already loaded, so only a font built as bold draws bold glyphs.
pub fn chart_font(points: f64, bold: bool) -> FontDesc<'static> {
    let style = if bold { FontStyle::Bold } else { FontStyle::Normal };
    (FONT, points_to_pixels(points), style).into_font()
}

fn render_err<E: std::fmt::Display>(err: E) -> GeneratorError {
    GeneratorError::Render(err.to_string())
}

/// Draw the chart into an RGB buffer of `figure_pixels()` size
pub fn draw_chart(
    buffer: &mut [u8],
    series: &GrowthSeries,
    params: &ChartParams,
) -> Result<(), GeneratorError> {
    let root = BitMapBackend::with_buffer(buffer, figure_pixels()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let frame = PlotFrame::new(params);

    for ((lower, upper), color) in band_bounds(series).iter().zip(LAYER_COLORS.iter()) {
        let mut outline: Vec<(i32, i32)> = series
            .t
            .iter()
            .zip(upper)
            .map(|(&t, &y)| frame.to_pixel((t, y)))
            .collect();
        outline.extend(
            series
                .t
                .iter()
                .zip(lower)
                .rev()
                .map(|(&t, &y)| frame.to_pixel((t, y))),
        );

        root.draw(&Polygon::new(outline, color.mix(LAYER_OPACITY).filled()))
            .map_err(render_err)?;
    }

    draw_axes(&root, &frame, params)?;

    // Title and subtitle sit above the top of the value axis, left-aligned with x = 0
    let title_at = frame.to_pixel((0.0, params.value_axis_max * 1.08));
    let subtitle_at = frame.to_pixel((0.0, params.value_axis_max * 1.02));
    root.draw(&Text::new(
        CHART_TITLE,
        title_at,
        chart_font(20.0, true)
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Bottom)),
    ))
    .map_err(render_err)?;
    root.draw(&Text::new(
        params.subtitle(),
        subtitle_at,
        chart_font(14.0, false)
            .color(&SUBTITLE_GREY)
            .pos(Pos::new(HPos::Left, VPos::Bottom)),
    ))
    .map_err(render_err)?;

    let arrow_style = BLACK.stroke_width(3);
    let head = points_to_pixels(5.0) as i32;
    let gap = points_to_pixels(3.0) as i32;
    for annotation in annotations(series, params) {
        let (tip_x, tip_y) = frame.to_pixel(annotation.target);
        let (text_x, text_y) = frame.to_pixel(annotation.text_at);

        root.draw(&PathElement::new(
            vec![(text_x - gap, text_y), (tip_x, tip_y)],
            arrow_style,
        ))
        .map_err(render_err)?;
        root.draw(&PathElement::new(
            vec![
                (tip_x + head, tip_y - head / 2),
                (tip_x, tip_y),
                (tip_x + head, tip_y + head / 2),
            ],
            arrow_style,
        ))
        .map_err(render_err)?;

        let line_height = (points_to_pixels(annotation.font_points) as f64 * 1.2).round() as i32;
        let first_line_y = text_y - line_height * (annotation.lines.len() as i32 - 1) / 2;
        for (i, line) in annotation.lines.iter().enumerate() {
            root.draw(&Text::new(
                *line,
                (text_x, first_line_y + line_height * i as i32),
                chart_font(annotation.font_points, true)
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            ))
            .map_err(render_err)?;
        }
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Bottom year axis and right value axis. No grid, no top or left spine.
fn draw_axes(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    frame: &PlotFrame,
    params: &ChartParams,
) -> Result<(), GeneratorError> {
    let axis_style = BLACK.stroke_width(3);
    let tick = tick_length();
    let pad = points_to_pixels(2.0) as i32;
    let tick_font = 12.0;

    root.draw(&PathElement::new(
        vec![(frame.left, frame.bottom), (frame.right, frame.bottom)],
        axis_style,
    ))
    .map_err(render_err)?;

    for year in params.year_ticks() {
        let (x, y) = frame.to_pixel((year, 0.0));
        root.draw(&PathElement::new(vec![(x, y), (x, y + tick)], axis_style))
            .map_err(render_err)?;
        root.draw(&Text::new(
            format!("{:.0}", year),
            (x, y + tick + pad),
            chart_font(tick_font, false)
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(render_err)?;
    }

    root.draw(&Text::new(
        "Years",
        (
            (frame.left + frame.right) / 2,
            frame.bottom + tick + 2 * pad + points_to_pixels(tick_font) as i32,
        ),
        chart_font(tick_font, false)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top)),
    ))
    .map_err(render_err)?;

    // Right spine, half transparent
    root.draw(&PathElement::new(
        vec![(frame.right, frame.top), (frame.right, frame.bottom)],
        BLACK.mix(0.5).stroke_width(3),
    ))
    .map_err(render_err)?;

    for value in params.value_ticks() {
        let (x, y) = frame.to_pixel((params.x_axis_max(), value));
        root.draw(&PathElement::new(vec![(x, y), (x + tick, y)], axis_style))
            .map_err(render_err)?;
        root.draw(&Text::new(
            format_currency(value, &params.currency_symbol),
            (x + tick + pad, y),
            chart_font(tick_font, false)
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center)),
        ))
        .map_err(render_err)?;
    }

    Ok(())
}

/// Pixels per meter for a resolution in dots per inch
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / 0.0254).round() as u32
}

/// Encode an RGB buffer as PNG with a pHYs chunk for `dpi`
pub fn write_png(
    output_path: &Path,
    buffer: &[u8],
    (width, height): (u32, u32),
    dpi: u32,
) -> Result<(), GeneratorError> {
    let file = File::create(output_path).map_err(|e| GeneratorError::io(output_path, e))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = dpi_to_pixels_per_meter(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header().map_err(render_err)?;
    writer.write_image_data(buffer).map_err(render_err)?;
    writer.finish().map_err(render_err)?;
    Ok(())
}

/// Draw the stacked-area chart and write it as a PNG to `output_path`
pub fn render_chart(
    series: &GrowthSeries,
    params: &ChartParams,
    output_path: &Path,
) -> Result<(), GeneratorError> {
    let (width, height) = figure_pixels();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    draw_chart(&mut buffer, series, params)?;
    write_png(output_path, &buffer, (width, height), CHART_DPI)
}
