pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod license;
pub mod logging;
pub mod output;
pub mod report;

// Re-export main types for easy access
pub use error::ReportError;
pub use inventory::{ArtifactInfo, Dependency, License};
pub use license::{LicenseMap, OverrideKey};
pub use report::{generate_report, render_inventory};
