//! Errors raised while loading the collaborators the footer service reads from.
//!
//! Footer assembly itself never fails; only configuration, catalogs and the
//! static manifest can be missing or malformed on disk.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BrandingError {
    /// A file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config or catalog TOML did not parse.
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Static manifest JSON did not parse.
    #[error("invalid static manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A setting with no sensible default is empty (deployment misconfiguration).
    #[error("required setting {0} is not configured")]
    MissingSetting(&'static str),
}

impl BrandingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_names_the_key() {
        let err = BrandingError::MissingSetting("SITE_NAME");
        assert_eq!(err.to_string(), "required setting SITE_NAME is not configured");
    }

    #[test]
    fn io_error_includes_path() {
        let err = BrandingError::io(
            "/etc/branding/config.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("/etc/branding/config.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
