use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::inventory::{inventory_path, load_inventory};
use crate::license::{resolve_licenses, LicenseMap};
use crate::output::format_markdown_output;

/// Load, resolve and render one inventory without touching the output file.
pub fn render_inventory(inventory: &Path, map: &LicenseMap, licenses_dir: &Path) -> Result<String> {
    let mut dependencies = load_inventory(inventory)?;
    resolve_licenses(&mut dependencies, map, licenses_dir)?;
    Ok(format_markdown_output(&dependencies))
}

/// Render the report for `variant` using the paths and tables in `config`.
pub fn generate_report(config: &Config, project_dir: &Path, variant: &str) -> Result<String> {
    let inventory = inventory_path(
        &config.inventory_dir(project_dir),
        config.inventory_file(),
        variant,
    )?;

    let _span = tracing::info_span!("report", variant).entered();
    render_inventory(&inventory, &config.license_map(), &config.licenses_dir(project_dir))
}
