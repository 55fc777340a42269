//! Marketing links: URLs of pages that may live on a separate marketing site.
//!
//! When the marketing site is enabled, links point at `ROOT` joined with the
//! configured path. Otherwise they fall back to the pages this site serves
//! itself, and to `#` when neither knows the link.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// URL returned for links that resolve nowhere.
pub const PLACEHOLDER_URL: &str = "#";

/// Named marketing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketingLink {
    About,
    News,
    Contact,
    Faq,
    Blog,
    Donate,
    Jobs,
    Tos,
    Privacy,
}

impl MarketingLink {
    pub const ALL: [MarketingLink; 9] = [
        MarketingLink::About,
        MarketingLink::News,
        MarketingLink::Contact,
        MarketingLink::Faq,
        MarketingLink::Blog,
        MarketingLink::Donate,
        MarketingLink::Jobs,
        MarketingLink::Tos,
        MarketingLink::Privacy,
    ];

    /// Configuration key for this link.
    pub fn key(self) -> &'static str {
        match self {
            MarketingLink::About => "ABOUT",
            MarketingLink::News => "NEWS",
            MarketingLink::Contact => "CONTACT",
            MarketingLink::Faq => "FAQ",
            MarketingLink::Blog => "BLOG",
            MarketingLink::Donate => "DONATE",
            MarketingLink::Jobs => "JOBS",
            MarketingLink::Tos => "TOS",
            MarketingLink::Privacy => "PRIVACY",
        }
    }
}

impl fmt::Display for MarketingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMarketingLink(pub String);

impl fmt::Display for UnknownMarketingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown marketing link {}", self.0)
    }
}

impl std::error::Error for UnknownMarketingLink {}

impl FromStr for MarketingLink {
    type Err = UnknownMarketingLink;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarketingLink::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMarketingLink(s.to_string()))
    }
}

/// Resolves marketing link names to URLs. An empty string or `#` means "no page".
pub trait MarketingLinks: Send + Sync {
    fn resolve(&self, link: MarketingLink) -> String;
}

/// The `[marketing]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingConfig {
    /// Send links to the external marketing site.
    #[serde(default)]
    pub enable_mktg_site: bool,
    /// Marketing site base URL, e.g. `https://www.example.com/`.
    #[serde(default)]
    pub root: String,
    /// Marketing site paths by link key, joined onto `root`.
    #[serde(default)]
    pub urls: BTreeMap<String, String>,
    /// Pages served by this site, by link key; used when the marketing site is off
    /// or does not list the link.
    #[serde(default)]
    pub local_urls: BTreeMap<String, String>,
}

impl Default for MarketingConfig {
    fn default() -> Self {
        let local_urls = [
            ("ABOUT", "/about"),
            ("CONTACT", "/contact"),
            ("FAQ", "/help"),
            ("TOS", "/tos"),
            ("PRIVACY", "/privacy"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            enable_mktg_site: false,
            root: String::new(),
            urls: BTreeMap::new(),
            local_urls,
        }
    }
}

/// [`MarketingLinks`] driven by [`MarketingConfig`].
#[derive(Debug, Clone)]
pub struct ConfiguredMarketingLinks {
    config: MarketingConfig,
}

impl ConfiguredMarketingLinks {
    pub fn new(config: MarketingConfig) -> Self {
        Self { config }
    }

    fn marketing_site_url(&self, key: &str) -> Option<String> {
        if !self.config.enable_mktg_site {
            return None;
        }
        let path = self.config.urls.get(key)?;
        let root = match url::Url::parse(&self.config.root) {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!("marketing root {:?} is not a URL: {err}", self.config.root);
                return None;
            }
        };
        match root.join(path) {
            Ok(u) => Some(u.to_string()),
            Err(err) => {
                tracing::warn!("cannot join marketing path {path:?} for {key}: {err}");
                None
            }
        }
    }
}

impl MarketingLinks for ConfiguredMarketingLinks {
    fn resolve(&self, link: MarketingLink) -> String {
        let key = link.key();
        self.marketing_site_url(key)
            .or_else(|| self.config.local_urls.get(key).cloned())
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mktg_config() -> MarketingConfig {
        let mut urls = BTreeMap::new();
        urls.insert("ABOUT".to_string(), "about-us".to_string());
        urls.insert("BLOG".to_string(), "/blog".to_string());
        MarketingConfig {
            enable_mktg_site: true,
            root: "https://www.example.com/site/".to_string(),
            urls,
            ..MarketingConfig::default()
        }
    }

    #[test]
    fn key_roundtrips_through_from_str() {
        for link in MarketingLink::ALL {
            assert_eq!(link.key().parse::<MarketingLink>(), Ok(link));
        }
        assert_eq!("tos".parse::<MarketingLink>(), Ok(MarketingLink::Tos));
        assert!("HONOR".parse::<MarketingLink>().is_err());
    }

    #[test]
    fn disabled_marketing_site_uses_local_pages() {
        let links = ConfiguredMarketingLinks::new(MarketingConfig::default());
        assert_eq!(links.resolve(MarketingLink::About), "/about");
        assert_eq!(links.resolve(MarketingLink::Faq), "/help");
        assert_eq!(links.resolve(MarketingLink::Blog), "#");
    }

    #[test]
    fn enabled_marketing_site_joins_root() {
        let links = ConfiguredMarketingLinks::new(mktg_config());
        assert_eq!(
            links.resolve(MarketingLink::About),
            "https://www.example.com/site/about-us"
        );
        assert_eq!(links.resolve(MarketingLink::Blog), "https://www.example.com/blog");
        // Not on the marketing site: local page, then placeholder.
        assert_eq!(links.resolve(MarketingLink::Tos), "/tos");
        assert_eq!(links.resolve(MarketingLink::Jobs), "#");
    }

    #[test]
    fn invalid_root_falls_back() {
        let cfg = MarketingConfig {
            root: "not a url".to_string(),
            ..mktg_config()
        };
        let links = ConfiguredMarketingLinks::new(cfg);
        assert_eq!(links.resolve(MarketingLink::About), "/about");
    }
}
