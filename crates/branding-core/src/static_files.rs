//! Static asset URLs, optionally fingerprinted through a manifest.
//!
//! The manifest maps asset names to content-hashed names
//! (`images/logo.png` → `images/logo.5891b5b522d5.png`) so assets can be
//! cached forever and still change on redeploy.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::error::BrandingError;

/// Conventional manifest file name inside a static root.
pub const MANIFEST_NAME: &str = "staticfiles.json";

const MANIFEST_VERSION: &str = "1.0";

/// Resolves a static asset name to the URL path it is served from.
pub trait StaticAssets: Send + Sync {
    fn url_for(&self, name: &str) -> String;
}

/// The `[static_files]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// URL prefix static assets are served under.
    pub base_url: String,
    /// Fingerprint manifest to apply. None = serve names unchanged.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            base_url: "/static/".to_string(),
            manifest: None,
        }
    }
}

/// On-disk manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticManifest {
    pub version: String,
    pub paths: BTreeMap<String, String>,
}

impl Default for StaticManifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            paths: BTreeMap::new(),
        }
    }
}

impl StaticManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| BrandingError::io(path, e))?;
        let manifest = serde_json::from_str(&data).map_err(|source| BrandingError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(manifest)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| BrandingError::io(path, e))?;
        Ok(())
    }

    /// Fingerprint every file under `root` (excluding an existing manifest).
    ///
    /// Symlinked files are hashed through the link; symlinked directories are
    /// not descended into, so link cycles cannot loop the walk.
    pub fn build(root: &Path) -> Result<Self> {
        let mut manifest = Self::default();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let entries =
                fs::read_dir(&dir).with_context(|| format!("read dir {}", dir.display()))?;
            for entry in entries {
                let entry = entry?;
                let path = entry.path();
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }
                if file_type.is_symlink() && path.is_dir() {
                    tracing::debug!("skipping symlinked directory {}", path.display());
                    continue;
                }
                let name = relative_name(root, &path)?;
                if name == MANIFEST_NAME {
                    continue;
                }
                let fingerprint = checksum::fingerprint_path(&path)?;
                let hashed = checksum::fingerprinted_name(&name, &fingerprint);
                manifest.paths.insert(name, hashed);
            }
        }
        tracing::debug!(
            "fingerprinted {} static files under {}",
            manifest.paths.len(),
            root.display()
        );
        Ok(manifest)
    }
}

/// `/`-separated path of `path` relative to `root`.
fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

/// [`StaticAssets`] serving from a URL prefix with an optional manifest.
#[derive(Debug, Clone)]
pub struct StaticStorage {
    base_url: String,
    manifest: BTreeMap<String, String>,
}

impl StaticStorage {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            manifest: BTreeMap::new(),
        }
    }

    pub fn with_manifest(mut self, manifest: StaticManifest) -> Self {
        self.manifest = manifest.paths;
        self
    }

    pub fn from_config(config: &StaticFilesConfig) -> Result<Self> {
        let storage = Self::new(&config.base_url);
        match &config.manifest {
            Some(path) => Ok(storage.with_manifest(StaticManifest::load(path)?)),
            None => Ok(storage),
        }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl StaticAssets for StaticStorage {
    fn url_for(&self, name: &str) -> String {
        let name = name.trim_start_matches('/');
        let resolved = self.manifest.get(name).map(String::as_str).unwrap_or(name);
        format!("{}{}", self.base_url, resolved)
    }
}
