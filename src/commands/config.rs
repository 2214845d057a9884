use anyhow::Result;
use package_license_report::config::load_config;
use std::path::Path;

pub fn handle_config(
    project_dir: &Path,
    config_path: Option<&Path>,
    show: bool,
    validate: bool,
    quiet: bool,
) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let config = match load_config(project_dir, config_path) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        let missing = config.missing_license_files(project_dir);
        if !missing.is_empty() {
            if !quiet {
                eprintln!("❌ Configuration references missing license files:");
                for path in &missing {
                    eprintln!("  - {}", path.display());
                }
            }
            std::process::exit(1);
        }

        if !quiet {
            println!("✅ Configuration is valid");
        }
    }

    Ok(())
}
