use std::path::PathBuf;

use crate::inventory::Dependency;

/// Fatal conditions raised while building a license report.
///
/// Every variant stops the run; nothing is retried and no partial report is
/// written.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid build variant {0:?}")]
    InvalidVariant(String),

    #[error("failed to read dependency inventory {}", .path.display())]
    InventoryMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dependency inventory {}", .path.display())]
    InventoryMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No mapping knows where to find the text. The whole entry is kept so a
    /// maintainer can add the missing mapping or override.
    #[error("no license file mapping for license {license:?} in dependency {entry}")]
    UnresolvedLicense {
        license: String,
        entry: Box<Dependency>,
    },

    #[error("failed to read license file {}", .path.display())]
    LicenseFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("license {license:?} of dependency {dependency:?} has empty text")]
    EmptyLicenseText { dependency: String, license: String },

    #[error("failed to write license report {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
