//! Microsite overrides: one deployment serving several branded sites.
//!
//! A microsite is picked by the first DNS label of the request host and
//! supplies string overrides (e.g. `PLATFORM_NAME`, `SITE_NAME`) layered on
//! top of the global settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `[microsites.<key>]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Microsite {
    /// First host label that selects this microsite (e.g. `openedx` for `openedx.example.com`).
    pub domain_prefix: String,
    /// Override values keyed by setting name.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Microsite {
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// All configured microsites, keyed by their config table name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicrositeRegistry {
    sites: BTreeMap<String, Microsite>,
}

impl MicrositeRegistry {
    pub fn new(sites: BTreeMap<String, Microsite>) -> Self {
        Self { sites }
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&Microsite> {
        self.sites.get(key)
    }

    /// Microsite serving `host`, matched on its first label (case-insensitive, port ignored).
    pub fn for_host(&self, host: &str) -> Option<&Microsite> {
        let prefix = host_prefix(host)?;
        let found = self
            .sites
            .iter()
            .find(|(_, site)| site.domain_prefix.eq_ignore_ascii_case(&prefix));
        match found {
            Some((key, site)) => {
                tracing::debug!("host {host} selected microsite {key}");
                Some(site)
            }
            None => None,
        }
    }
}

/// First DNS label of a host, or `None` for an empty/unparseable host.
fn host_prefix(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }
    let parsed = url::Url::parse(&format!("http://{host}")).ok()?;
    let name = parsed.host_str()?;
    let label = name.split('.').next().filter(|s| !s.is_empty())?;
    Some(label.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MicrositeRegistry {
        let mut values = BTreeMap::new();
        values.insert("PLATFORM_NAME".to_string(), "Partner U".to_string());
        values.insert("SITE_NAME".to_string(), "partner.example.com".to_string());
        let mut sites = BTreeMap::new();
        sites.insert(
            "partner".to_string(),
            Microsite {
                domain_prefix: "partner".to_string(),
                values,
            },
        );
        MicrositeRegistry::new(sites)
    }

    #[test]
    fn host_prefix_ignores_port_and_case() {
        assert_eq!(host_prefix("Partner.Example.com:8000").as_deref(), Some("partner"));
        assert_eq!(host_prefix("localhost").as_deref(), Some("localhost"));
        assert_eq!(host_prefix(""), None);
    }

    #[test]
    fn for_host_matches_first_label() {
        let reg = registry();
        let site = reg.for_host("partner.example.com").expect("microsite");
        assert_eq!(site.get_value("PLATFORM_NAME"), Some("Partner U"));
        assert_eq!(site.get_value("LOGO"), None);
    }

    #[test]
    fn for_host_unknown_host_is_none() {
        let reg = registry();
        assert!(reg.for_host("www.example.com").is_none());
        assert!(reg.for_host("").is_none());
    }

    #[test]
    fn registry_parses_from_toml_tables() {
        let toml = r#"
            [partner]
            domain_prefix = "partner"
            [partner.values]
            PLATFORM_NAME = "Partner U"
        "#;
        let reg: MicrositeRegistry = toml::from_str(toml).unwrap();
        assert_eq!(
            reg.get("partner").and_then(|m| m.get_value("PLATFORM_NAME")),
            Some("Partner U")
        );
    }
}
