//! `branding config-path` – show where the config file lives.

use anyhow::Result;
use branding_core::config;

pub fn run_config_path() -> Result<()> {
    let path = config::config_path()?;
    let note = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), note);
    Ok(())
}
