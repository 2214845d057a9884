use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};
use crate::inventory::Dependency;

/// Dependencies in report order: by name, input order kept for equal names.
pub fn sorted_dependencies(dependencies: &[Dependency]) -> Vec<&Dependency> {
    let mut sorted: Vec<&Dependency> = dependencies.iter().collect();
    // `sort_by` is stable, which keeps same-named artifacts in inventory order.
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// Render the markdown report. Every license is expected to carry text.
pub fn format_markdown_output(dependencies: &[Dependency]) -> String {
    let mut output = String::new();

    for dependency in sorted_dependencies(dependencies) {
        match &dependency.artifact_info {
            Some(info) => output.push_str(&format!("## {} ({})", dependency.name, info)),
            None => output.push_str(&format!("## {}", dependency.name)),
        }

        for license in &dependency.licenses {
            let text = license.text.as_deref().unwrap_or_default();
            output.push_str("\n\n```\n");
            output.push_str(text.trim_matches('\n'));
            output.push_str("\n```\n\n");
        }

        // Keep the next heading on its own line.
        if dependency.licenses.is_empty() {
            output.push_str("\n\n");
        }
    }

    output
}

/// Replace the report at `path` with `content`.
///
/// The content goes to a temporary file next to the report, which is then
/// renamed over it, so a failed write never leaves a truncated report.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    let to_error = |source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(to_error)?;

    let mut staged = NamedTempFile::new_in(parent).map_err(to_error)?;
    staged.write_all(content.as_bytes()).map_err(to_error)?;
    staged.as_file().sync_all().map_err(to_error)?;
    staged.persist(path).map_err(|e| to_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote license report");
    Ok(())
}
