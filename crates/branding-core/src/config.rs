use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BrandingError;
use crate::marketing::MarketingConfig;
use crate::microsite::{Microsite, MicrositeRegistry};
use crate::static_files::StaticFilesConfig;

/// Feature flags (the `[features]` section).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// The deployment is the organization's own domain, not a partner site.
    #[serde(default)]
    pub is_edx_domain: bool,
    /// Show app store badges in the footer.
    #[serde(default)]
    pub enable_footer_mobile_app_links: bool,
}

/// Display data for one social network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialDisplay {
    #[serde(default)]
    pub title: String,
    /// CSS icon class, e.g. `fa-facebook-square`.
    #[serde(default)]
    pub icon: String,
}

/// Translation catalogs (the `[i18n]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language used when the caller does not ask for one.
    pub default_language: String,
    /// Directory holding `<language>.toml` catalogs. None = untranslated.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            catalog_dir: None,
        }
    }
}

/// Global site settings loaded from `~/.config/branding/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Display name of the platform (used in the copyright of partner sites).
    pub platform_name: String,
    /// Host (and optional port) the site is served from.
    pub site_name: String,
    /// Social networks shown in the footer, in display order.
    #[serde(default)]
    pub social_media_footer_names: Vec<String>,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub social_media_footer_display: BTreeMap<String, SocialDisplay>,
    #[serde(default)]
    pub social_media_footer_urls: BTreeMap<String, String>,
    /// App store URLs keyed by `apple` / `google`.
    #[serde(default)]
    pub mobile_store_urls: BTreeMap<String, String>,
    #[serde(default)]
    pub marketing: MarketingConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub microsites: MicrositeRegistry,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        let social = [
            ("facebook", "Facebook", "fa-facebook-square"),
            ("twitter", "Twitter", "fa-twitter"),
            ("linkedin", "LinkedIn", "fa-linkedin-square"),
            ("google_plus", "Google+", "fa-google-plus-square"),
            ("tumblr", "Tumblr", "fa-tumblr"),
            ("meetup", "Meetup", "fa-calendar"),
            ("reddit", "Reddit", "fa-reddit"),
            ("youtube", "Youtube", "fa-youtube"),
        ];
        let mobile_store_urls = [("apple", "#"), ("google", "#")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            platform_name: "Your Platform Name Here".to_string(),
            site_name: "localhost:8000".to_string(),
            social_media_footer_names: social.iter().map(|(n, _, _)| n.to_string()).collect(),
            features: Features::default(),
            social_media_footer_display: social
                .iter()
                .map(|(name, title, icon)| {
                    (
                        name.to_string(),
                        SocialDisplay {
                            title: title.to_string(),
                            icon: icon.to_string(),
                        },
                    )
                })
                .collect(),
            social_media_footer_urls: BTreeMap::new(),
            mobile_store_urls,
            marketing: MarketingConfig::default(),
            static_files: StaticFilesConfig::default(),
            i18n: I18nConfig::default(),
            microsites: MicrositeRegistry::default(),
        }
    }
}

impl BrandingConfig {
    /// Reject settings that have no usable fallback.
    pub fn validate(&self) -> Result<(), BrandingError> {
        if self.site_name.trim().is_empty() {
            return Err(BrandingError::MissingSetting("SITE_NAME"));
        }
        if self.platform_name.trim().is_empty() {
            return Err(BrandingError::MissingSetting("PLATFORM_NAME"));
        }
        Ok(())
    }

    /// Snapshot of the global tier only.
    pub fn site(&self) -> SiteConfig<'_> {
        SiteConfig::new(self, None)
    }

    /// Snapshot for a request to `host`: global settings plus the matching microsite, if any.
    pub fn site_for_host(&self, host: Option<&str>) -> SiteConfig<'_> {
        let microsite = host.and_then(|h| self.microsites.for_host(h));
        SiteConfig::new(self, microsite)
    }
}

/// Who owns the domain the footer is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branding {
    /// The organization's own site.
    CanonicalDomain,
    /// A partner or self-hosted deployment.
    PartnerSite,
}

impl Branding {
    pub fn from_features(features: &Features) -> Self {
        if features.is_edx_domain {
            Branding::CanonicalDomain
        } else {
            Branding::PartnerSite
        }
    }
}

/// Immutable two-tier view: microsite overrides over global settings.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig<'a> {
    global: &'a BrandingConfig,
    microsite: Option<&'a Microsite>,
    branding: Branding,
}

impl<'a> SiteConfig<'a> {
    pub fn new(global: &'a BrandingConfig, microsite: Option<&'a Microsite>) -> Self {
        Self {
            global,
            microsite,
            branding: Branding::from_features(&global.features),
        }
    }

    pub fn global(&self) -> &'a BrandingConfig {
        self.global
    }

    pub fn microsite(&self) -> Option<&'a Microsite> {
        self.microsite
    }

    pub fn branding(&self) -> Branding {
        self.branding
    }

    /// Microsite value for `key`, else `default`.
    pub fn get_value(&self, key: &str, default: &'a str) -> &'a str {
        self.microsite
            .and_then(|m| m.get_value(key))
            .unwrap_or(default)
    }

    pub fn platform_name(&self) -> &'a str {
        let global = self.global;
        self.get_value("PLATFORM_NAME", &global.platform_name)
    }

    pub fn site_name(&self) -> &'a str {
        let global = self.global;
        self.get_value("SITE_NAME", &global.site_name)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("branding")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BrandingConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BrandingConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BrandingError::io(parent, e))?;
        }
        fs::write(&path, toml).map_err(|e| BrandingError::io(&path, e))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<BrandingConfig> {
    let data = fs::read_to_string(path).map_err(|e| BrandingError::io(path, e))?;
    let cfg: BrandingConfig = toml::from_str(&data).map_err(|source| BrandingError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}
