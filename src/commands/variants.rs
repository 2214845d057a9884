use anyhow::Result;
use package_license_report::config::load_config;
use package_license_report::inventory::find_variants;
use std::path::Path;

pub fn handle_variants(project_dir: &Path, config_path: Option<&Path>, quiet: bool) -> Result<()> {
    let config = load_config(project_dir, config_path)?;
    let inventory_dir = config.inventory_dir(project_dir);

    let variants = find_variants(&inventory_dir, config.inventory_file())?;

    if variants.is_empty() {
        if !quiet {
            eprintln!("No dependency inventories found under {}", inventory_dir.display());
        }
        std::process::exit(1);
    }

    for variant in variants {
        println!("{}", variant);
    }

    Ok(())
}
