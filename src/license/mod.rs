use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::inventory::ArtifactInfo;

pub mod resolver;

pub use resolver::{resolve_licenses, Resolution, ResolveStats};

/// Exact artifact tuple an override applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideKey {
    pub license: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl OverrideKey {
    pub fn new(license: &str, artifact: &ArtifactInfo) -> Self {
        Self {
            license: license.to_string(),
            group: artifact.group.clone(),
            artifact: artifact.name.clone(),
            version: artifact.version.clone(),
        }
    }
}

/// A `[[overrides]]` entry as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub license: String,
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub file: String,
}

impl OverrideEntry {
    pub fn key(&self) -> OverrideKey {
        OverrideKey {
            license: self.license.clone(),
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            version: self.version.clone(),
        }
    }
}

const BUILTIN_LICENSE_FILES: &[(&str, &str)] = &[
    ("Android Software Development Kit License", "Android-SDK.txt"),
    ("Apache License 2.0", "Apache-2.0.txt"),
    ("Apache License, Version 2.0", "Apache-2.0.txt"),
    ("The Apache License, Version 2.0", "Apache-2.0.txt"),
    ("The Apache Software License, Version 2.0", "Apache-2.0.txt"),
];

const BUILTIN_OVERRIDES: &[(&str, &str, &str, &str, &str)] = &[(
    "MIT License",
    "com.github.mukeshsolanki",
    "MarkdownView-Android",
    "2.0.0",
    "MarkdownView-Android.txt",
)];

/// Lookup tables from license declarations to license text file names.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LicenseMap {
    by_name: IndexMap<String, String>,
    overrides: IndexMap<OverrideKey, String>,
}

impl LicenseMap {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let by_name = BUILTIN_LICENSE_FILES
            .iter()
            .map(|(name, file)| (name.to_string(), file.to_string()))
            .collect();

        let overrides = BUILTIN_OVERRIDES
            .iter()
            .map(|(license, group, artifact, version, file)| {
                let key = OverrideKey {
                    license: license.to_string(),
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: version.to_string(),
                };
                (key, file.to_string())
            })
            .collect();

        Self { by_name, overrides }
    }

    /// Built-in tables (unless disabled) with the configured entries on top.
    pub fn from_config(config: &Config) -> Self {
        let mut map = if config.builtin_mappings.unwrap_or(true) {
            Self::builtin()
        } else {
            Self::empty()
        };

        for (name, file) in &config.license_files {
            map.insert_name(name, file);
        }
        for entry in &config.overrides {
            map.insert_override(entry.key(), &entry.file);
        }

        map
    }

    pub fn insert_name(&mut self, license: &str, file: &str) {
        self.by_name.insert(license.to_string(), file.to_string());
    }

    pub fn insert_override(&mut self, key: OverrideKey, file: &str) {
        self.overrides.insert(key, file.to_string());
    }

    pub fn file_for_name(&self, license: &str) -> Option<&str> {
        self.by_name.get(license).map(String::as_str)
    }

    pub fn file_for_override(&self, key: &OverrideKey) -> Option<&str> {
        self.overrides.get(key).map(String::as_str)
    }

    pub fn names(&self) -> &IndexMap<String, String> {
        &self.by_name
    }

    pub fn overrides(&self) -> &IndexMap<OverrideKey, String> {
        &self.overrides
    }

    /// Every file name referenced by either table, first occurrence order.
    pub fn referenced_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for file in self.by_name.values().chain(self.overrides.values()) {
            if !files.contains(&file.as_str()) {
                files.push(file.as_str());
            }
        }
        files
    }
}
