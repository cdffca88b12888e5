//! Write the logo SVGs for the docs site
//!
//! Paths are relative to the current working directory, and static/img must
//! already exist there.

use anyhow::Context;
use docs_assets::logo::write_logos;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let paths = write_logos(Path::new(".")).context("Failed to write logo files")?;
    log::debug!("Logo files: {:?}", paths);

    println!("Generated static/img/networth-icon.svg (and v1/v2 variants)");
    Ok(())
}
