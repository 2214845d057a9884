use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use toml_edit::{value, ArrayOfTables, DocumentMut, Item, Table};

use crate::config::{
    DEFAULT_INVENTORY_DIR, DEFAULT_INVENTORY_FILE, DEFAULT_LICENSES_DIR, DEFAULT_OUTPUT,
};
use crate::license::LicenseMap;

/// Write a starter configuration holding the defaults and the built-in tables.
///
/// An existing file is only touched with `force`; its unrelated keys are
/// kept while the keys managed here are replaced.
pub fn generate_config_at_path<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();

    let mut doc = if path.exists() {
        if !force {
            anyhow::bail!(
                "{} already exists. Use --force to overwrite it.",
                path.display()
            );
        }
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .parse::<DocumentMut>()
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        DocumentMut::new()
    };

    fill_starter_config(&mut doc, &LicenseMap::builtin());

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn fill_starter_config(doc: &mut DocumentMut, map: &LicenseMap) {
    doc["inventory_dir"] = value(DEFAULT_INVENTORY_DIR);
    doc["inventory_file"] = value(DEFAULT_INVENTORY_FILE);
    doc["licenses_dir"] = value(DEFAULT_LICENSES_DIR);
    doc["output"] = value(DEFAULT_OUTPUT);
    // The tables below already list the built-ins.
    doc["builtin_mappings"] = value(false);

    let mut license_files = Table::new();
    license_files
        .decor_mut()
        .set_prefix("\n# License name -> file in licenses_dir\n");
    for (name, file) in map.names() {
        license_files[name.as_str()] = value(file.as_str());
    }
    doc["license_files"] = Item::Table(license_files);

    let mut overrides = ArrayOfTables::new();
    for (key, file) in map.overrides() {
        let mut entry = Table::new();
        entry["license"] = value(key.license.as_str());
        entry["group"] = value(key.group.as_str());
        entry["artifact"] = value(key.artifact.as_str());
        entry["version"] = value(key.version.as_str());
        entry["file"] = value(file.as_str());
        overrides.push(entry);
    }
    doc["overrides"] = Item::ArrayOfTables(overrides);
}
