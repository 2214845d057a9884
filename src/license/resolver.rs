use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{LicenseMap, OverrideKey};
use crate::error::{ReportError, Result};
use crate::inventory::{ArtifactInfo, Dependency};

/// Which table supplied the license file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    ByName(&'a str),
    ByOverride(&'a str),
}

impl<'a> Resolution<'a> {
    pub fn file(&self) -> &'a str {
        match self {
            Resolution::ByName(file) | Resolution::ByOverride(file) => *file,
        }
    }
}

/// Counts reported once resolution finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolveStats {
    pub embedded: usize,
    pub by_name: usize,
    pub by_override: usize,
}

/// The name table always wins; the override table is only consulted when the
/// name is unknown and the dependency has coordinates.
pub fn resolve_file<'a>(
    map: &'a LicenseMap,
    license: &str,
    artifact: Option<&ArtifactInfo>,
) -> Option<Resolution<'a>> {
    if let Some(file) = map.file_for_name(license) {
        return Some(Resolution::ByName(file));
    }

    let artifact = artifact?;
    map.file_for_override(&OverrideKey::new(license, artifact))
        .map(Resolution::ByOverride)
}

/// Fill in the text of every license that arrived without one.
///
/// Stops at the first license no table can place. Each license file is read
/// at most once per run.
pub fn resolve_licenses(
    dependencies: &mut [Dependency],
    map: &LicenseMap,
    licenses_dir: &Path,
) -> Result<ResolveStats> {
    let mut stats = ResolveStats::default();
    let mut texts: HashMap<&str, String> = HashMap::new();

    for dependency in dependencies.iter_mut() {
        let mut pending = Vec::new();

        for (index, license) in dependency.licenses.iter().enumerate() {
            if license.has_text() {
                stats.embedded += 1;
                continue;
            }

            let resolution = resolve_file(map, &license.name, dependency.artifact_info.as_ref())
                .ok_or_else(|| ReportError::UnresolvedLicense {
                    license: license.name.clone(),
                    entry: Box::new(dependency.clone()),
                })?;

            tracing::debug!(
                dependency = %dependency.name,
                license = %license.name,
                file = resolution.file(),
                "resolved license file"
            );

            match resolution {
                Resolution::ByName(_) => stats.by_name += 1,
                Resolution::ByOverride(_) => stats.by_override += 1,
            }
            pending.push((index, resolution.file()));
        }

        for (index, file) in pending {
            if !texts.contains_key(file) {
                let text = read_license_file(&licenses_dir.join(file))?;
                texts.insert(file, text);
            }

            let license = &mut dependency.licenses[index];
            let text = &texts[file];
            if text.trim_matches('\n').is_empty() {
                return Err(ReportError::EmptyLicenseText {
                    dependency: dependency.name.clone(),
                    license: license.name.clone(),
                });
            }
            license.text = Some(text.clone());
        }
    }

    tracing::info!(
        embedded = stats.embedded,
        by_name = stats.by_name,
        by_override = stats.by_override,
        "resolved license text"
    );

    Ok(stats)
}

/// License files may carry CRLF or CR line endings; the report uses `\n`.
fn read_license_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::LicenseFileMissing {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}
