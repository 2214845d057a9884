pub mod build;
pub mod config;
pub mod init;
pub mod variants;

pub use build::handle_build;
pub use config::handle_config;
pub use init::handle_init;
pub use variants::handle_variants;
