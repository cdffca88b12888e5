//! Render the compound interest example chart for the docs site
//!
//! Writes static/img/compound-interest-graph.png under the crate checkout.
//! The base directory is `CARGO_MANIFEST_DIR`, fixed when the binary is
//! compiled, so a copied or installed binary still writes into the source
//! tree it was built from. Run it with `cargo run --bin generate_graph`.

use anyhow::Context;
use docs_assets::chart::{generate_chart_with, ChartParams};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let params = ChartParams::default();
    log::debug!("Chart params: {}", serde_json::to_string(&params)?);

    let base_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let output_path = generate_chart_with(base_dir, &params)
        .with_context(|| format!("Failed to generate chart under {}", base_dir.display()))?;

    println!("Graph saved to {}", output_path.display());
    Ok(())
}
