use anyhow::Result;
use package_license_report::config::CONFIG_FILE_NAME;
use package_license_report::init;
use std::path::Path;

pub fn handle_init(project_dir: &Path, config_path: Option<&Path>, force: bool, quiet: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => project_dir.join(path),
        None => project_dir.join(CONFIG_FILE_NAME),
    };

    init::generate_config_at_path(&path, force)?;

    if !quiet {
        println!("✅ Wrote {}", path.display());
    }

    Ok(())
}
