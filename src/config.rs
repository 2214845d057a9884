use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::license::{LicenseMap, OverrideEntry};

pub const CONFIG_FILE_NAME: &str = "license-report.toml";

pub const DEFAULT_INVENTORY_DIR: &str = "build/generated/oss_licenses";
pub const DEFAULT_INVENTORY_FILE: &str = "dependencies_with_licenses.json";
pub const DEFAULT_LICENSES_DIR: &str = "../licenses";
pub const DEFAULT_OUTPUT: &str = "src/main/assets/PACKAGE_LICENSES.md";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one inventory sub-directory per build variant
    pub inventory_dir: Option<PathBuf>,

    /// Inventory file name inside each variant directory
    pub inventory_file: Option<String>,

    /// Directory of plain-text license files
    pub licenses_dir: Option<PathBuf>,

    /// Markdown report destination
    pub output: Option<PathBuf>,

    /// Include the built-in license tables
    pub builtin_mappings: Option<bool>,

    /// Extra license name to file entries
    #[serde(default)]
    pub license_files: IndexMap<String, String>,

    /// Per-artifact corrections
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_dir: Some(PathBuf::from(DEFAULT_INVENTORY_DIR)),
            inventory_file: Some(DEFAULT_INVENTORY_FILE.to_string()),
            licenses_dir: Some(PathBuf::from(DEFAULT_LICENSES_DIR)),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            builtin_mappings: Some(true),
            license_files: IndexMap::new(),
            overrides: Vec::new(),
        }
    }
}

impl Config {
    pub fn inventory_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(
            self.inventory_dir
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_INVENTORY_DIR)),
        )
    }

    pub fn inventory_file(&self) -> &str {
        self.inventory_file.as_deref().unwrap_or(DEFAULT_INVENTORY_FILE)
    }

    pub fn licenses_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(
            self.licenses_dir
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_LICENSES_DIR)),
        )
    }

    pub fn output(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.output.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT)))
    }

    pub fn license_map(&self) -> LicenseMap {
        LicenseMap::from_config(self)
    }

    /// License files referenced by the effective tables that do not exist
    /// under `licenses_dir`.
    pub fn missing_license_files(&self, project_dir: &Path) -> Vec<PathBuf> {
        let licenses_dir = self.licenses_dir(project_dir);
        self.license_map()
            .referenced_files()
            .into_iter()
            .map(|file| licenses_dir.join(file))
            .filter(|path| !path.is_file())
            .collect()
    }
}

/// Load configuration for `project_dir`.
///
/// An explicit path must exist. Without one, `license-report.toml` in the
/// project directory is used when present and the defaults otherwise. Keys
/// absent from the file keep their defaults.
pub fn load_config(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => {
            let path = project_dir.join(path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => {
            let path = project_dir.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let defaults = Config::default();
    config.inventory_dir = config.inventory_dir.or(defaults.inventory_dir);
    config.inventory_file = config.inventory_file.or(defaults.inventory_file);
    config.licenses_dir = config.licenses_dir.or(defaults.licenses_dir);
    config.output = config.output.or(defaults.output);
    config.builtin_mappings = config.builtin_mappings.or(defaults.builtin_mappings);

    tracing::debug!(path = %config_path.display(), "loaded configuration");
    Ok(config)
}
