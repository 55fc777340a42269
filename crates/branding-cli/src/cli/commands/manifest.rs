//! `branding manifest <static-root>` – fingerprint static assets.

use anyhow::Result;
use branding_core::static_files::{StaticManifest, MANIFEST_NAME};
use std::path::Path;

/// Build the manifest for `static_root` and write it to `output` (or the root's default manifest path).
pub fn run_manifest(static_root: &Path, output: Option<&Path>) -> Result<()> {
    let manifest = StaticManifest::build(static_root)?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| static_root.join(MANIFEST_NAME));
    manifest.write(&path)?;
    println!("Wrote {} entries to {}", manifest.paths.len(), path.display());
    Ok(())
}
