use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// One third-party library and the licenses it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    pub licenses: Vec<License>,
    #[serde(default)]
    pub artifact_info: Option<ArtifactInfo>,
    /// The record exactly as the inventory had it, unknown fields included.
    #[serde(skip)]
    pub raw: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    /// Missing for licenses the upstream generator could not embed.
    #[serde(default)]
    pub text: Option<String>,
}

/// Maven-style coordinates of the artifact a dependency came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl License {
    /// Text counts as present only if something is left once surrounding
    /// newlines are stripped.
    pub fn has_text(&self) -> bool {
        self.text
            .as_deref()
            .is_some_and(|t| !t.trim_matches('\n').is_empty())
    }
}

impl fmt::Display for ArtifactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl fmt::Display for Dependency {
    // Compact JSON: the inventory record when loaded from one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw) = &self.raw {
            return write!(f, "{}", raw);
        }
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

/// Location of the inventory generated for `variant`.
pub fn inventory_path(inventory_dir: &Path, inventory_file: &str, variant: &str) -> Result<PathBuf> {
    validate_variant(variant)?;
    Ok(inventory_dir.join(variant).join(inventory_file))
}

fn validate_variant(variant: &str) -> Result<()> {
    let invalid = variant.trim().is_empty()
        || variant == "."
        || variant == ".."
        || variant.contains(['/', '\\']);
    if invalid {
        return Err(ReportError::InvalidVariant(variant.to_string()));
    }
    Ok(())
}

/// Parse the inventory file, keeping the entries in file order.
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<Dependency>> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| ReportError::InventoryMissing {
        path: path.to_path_buf(),
        source,
    })?;

    let malformed = |source| ReportError::InventoryMalformed {
        path: path.to_path_buf(),
        source,
    };

    let records: Vec<serde_json::Value> = serde_json::from_str(&content).map_err(malformed)?;
    let dependencies = records
        .into_iter()
        .map(|record| {
            let mut dependency: Dependency = serde_json::from_value(record.clone())?;
            dependency.raw = Some(record);
            Ok(dependency)
        })
        .collect::<std::result::Result<Vec<_>, serde_json::Error>>()
        .map_err(malformed)?;

    tracing::info!(
        path = %path.display(),
        dependencies = dependencies.len(),
        "loaded dependency inventory"
    );

    Ok(dependencies)
}

/// Build variants under `inventory_dir` that have an inventory file, sorted.
pub fn find_variants(inventory_dir: &Path, inventory_file: &str) -> anyhow::Result<Vec<String>> {
    let pattern = format!(
        "{}/*/{}",
        glob::Pattern::escape(&inventory_dir.to_string_lossy()),
        glob::Pattern::escape(inventory_file)
    );

    let mut variants = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if let Some(variant) = path
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
        {
            variants.push(variant.to_string());
        }
    }

    variants.sort();
    variants.dedup();
    Ok(variants)
}
