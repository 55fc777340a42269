//! CLI command handlers. Each command is in its own file.

mod base_url;
mod config_path;
mod context;
mod footer;
mod manifest;

pub use base_url::run_base_url;
pub use config_path::run_config_path;
pub use context::SiteContext;
pub use footer::run_footer;
pub use manifest::run_manifest;
