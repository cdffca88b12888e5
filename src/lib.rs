//! Static asset generators for the documentation site
//!
//! Two independent one-shot generators:
//! - `chart`: compound vs simple interest stacked-area PNG
//! - `logo`: circular mountain logo SVG variants

pub mod error;
pub mod chart;
pub mod logo;

pub use error::GeneratorError;
pub use chart::{generate_chart, ChartParams, GrowthSeries};
pub use logo::{write_logos, LogoVariant, Palette};
