//! Configuration and collaborators shared by the footer commands.

use anyhow::Result;
use branding_core::config::{self, BrandingConfig};
use branding_core::i18n::CatalogTranslator;
use branding_core::marketing::ConfiguredMarketingLinks;
use branding_core::static_files::StaticStorage;
use branding_core::FooterService;
use std::collections::HashMap;
use std::path::Path;

pub struct SiteContext {
    pub config: BrandingConfig,
    links: ConfiguredMarketingLinks,
    assets: StaticStorage,
    translator: CatalogTranslator,
}

impl SiteContext {
    /// Load config from `config_path` (or the default location) and build its collaborators.
    pub fn load(config_path: Option<&Path>, language: Option<&str>) -> Result<Self> {
        let cfg = match config_path {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Self::from_config(cfg, language)
    }

    pub fn from_config(cfg: BrandingConfig, language: Option<&str>) -> Result<Self> {
        let language = language.unwrap_or(&cfg.i18n.default_language).to_string();
        let translator = match &cfg.i18n.catalog_dir {
            Some(dir) => CatalogTranslator::load_or_untranslated(dir, &language),
            None => CatalogTranslator::new(language, HashMap::new()),
        };
        Ok(Self {
            links: ConfiguredMarketingLinks::new(cfg.marketing.clone()),
            assets: StaticStorage::from_config(&cfg.static_files)?,
            translator,
            config: cfg,
        })
    }

    pub fn service(&self, host: Option<&str>) -> FooterService<'_> {
        FooterService::new(
            self.config.site_for_host(host),
            &self.links,
            &self.assets,
            &self.translator,
        )
    }
}
