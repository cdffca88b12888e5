//! Logo SVG generator
//!
//! Writes both logo variants plus the canonical `networth-icon.svg`, which is
//! a copy of the faceted mountain.

mod palette;
mod templates;

pub use palette::{
    Palette, BADGE_CENTER, BADGE_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH, SNOW_SHADE,
};
pub use templates::{defs, faceted_mountain, layered_landscape};

use crate::error::GeneratorError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the logos are written to, relative to the base directory
pub const LOGO_OUTPUT_DIR: &str = "static/img";

/// File name downstream consumers treat as "the" logo
pub const CANONICAL_LOGO_FILE: &str = "networth-icon.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    FacetedMountain,
    LayeredLandscape,
}

impl LogoVariant {
    pub const ALL: [LogoVariant; 2] = [LogoVariant::FacetedMountain, LogoVariant::LayeredLandscape];

    /// Variant copied to the canonical file name
    pub const CANONICAL: LogoVariant = LogoVariant::FacetedMountain;

    pub fn file_name(&self) -> &'static str {
        match self {
            LogoVariant::FacetedMountain => "networth-icon-v1.svg",
            LogoVariant::LayeredLandscape => "networth-icon-v2.svg",
        }
    }

    pub fn render(&self, palette: &Palette) -> String {
        match self {
            LogoVariant::FacetedMountain => faceted_mountain(palette),
            LogoVariant::LayeredLandscape => layered_landscape(palette),
        }
    }
}

/// Write every variant and the canonical copy under `base_dir/static/img`
///
/// The output directory must already exist; it is never created here.
/// Returns the written paths, variants first and the canonical file last.
pub fn write_logos(base_dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    write_logos_with(base_dir, &Palette::default())
}

pub fn write_logos_with(base_dir: &Path, palette: &Palette) -> Result<Vec<PathBuf>, GeneratorError> {
    let output_dir = base_dir.join(LOGO_OUTPUT_DIR);
    let mut written = Vec::with_capacity(LogoVariant::ALL.len() + 1);
    let mut canonical_markup = None;

    for variant in LogoVariant::ALL {
        let markup = variant.render(palette);
        let path = output_dir.join(variant.file_name());
        fs::write(&path, &markup).map_err(|e| GeneratorError::io(&path, e))?;
        log::debug!("Wrote {:?} logo to {}", variant, path.display());
        written.push(path);

        if variant == LogoVariant::CANONICAL {
            canonical_markup = Some(markup);
        }
    }

    let markup = canonical_markup.unwrap_or_else(|| LogoVariant::CANONICAL.render(palette));
    let path = output_dir.join(CANONICAL_LOGO_FILE);
    fs::write(&path, markup).map_err(|e| GeneratorError::io(&path, e))?;
    written.push(path);

    log::info!("Wrote {} logo files to {}", written.len(), output_dir.display());
    Ok(written)
}
