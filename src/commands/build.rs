use anyhow::{Context, Result};
use package_license_report::config::load_config;
use package_license_report::output::write_report;
use package_license_report::report::generate_report;
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle_build(
    project_dir: &Path,
    config_path: Option<&Path>,
    variant: &str,
    output: Option<PathBuf>,
    check: bool,
    quiet: bool,
) -> Result<()> {
    let config = load_config(project_dir, config_path)?;

    // The whole report is rendered before the output file is touched, so a
    // failure here leaves the previous report as it was.
    let report = generate_report(&config, project_dir, variant)
        .with_context(|| format!("Failed to build license report for variant '{}'", variant))?;

    let output_path = match output {
        Some(path) => project_dir.join(path),
        None => config.output(project_dir),
    };

    if check {
        let existing = fs::read_to_string(&output_path).ok();
        if existing.as_deref() != Some(report.as_str()) {
            anyhow::bail!(
                "{} is out of date for variant '{}'. Run without --check to regenerate it.",
                output_path.display(),
                variant
            );
        }
        if !quiet {
            println!("✅ {} is up to date", output_path.display());
        }
        return Ok(());
    }

    write_report(&output_path, &report)?;

    if !quiet {
        println!("✅ Wrote license report to {}", output_path.display());
    }

    Ok(())
}
