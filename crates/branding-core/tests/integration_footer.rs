//! Integration test: config, catalog and static manifest on disk, footer assembled end to end.

use branding_core::config;
use branding_core::i18n::CatalogTranslator;
use branding_core::marketing::ConfiguredMarketingLinks;
use branding_core::static_files::{StaticManifest, StaticStorage, MANIFEST_NAME};
use branding_core::FooterService;
use std::fs;
use tempfile::tempdir;

const CONFIG: &str = r#"
platform_name = "MyOrg"
site_name = "lms.example.com"
social_media_footer_names = ["facebook", "twitter"]

[features]
enable_footer_mobile_app_links = true

[social_media_footer_display.facebook]
title = "Facebook"
icon = "fa-facebook-square"

[social_media_footer_urls]
facebook = "https://www.facebook.com/example"

[mobile_store_urls]
apple = "https://apps.apple.com/app/example"
google = "https://play.google.com/store/apps/example"

[marketing]
enable_mktg_site = true
root = "https://www.example.com/"

[marketing.urls]
ABOUT = "about"
BLOG = "blog"
TOS = "legal/tos"
PRIVACY = "legal/privacy"

[microsites.partner]
domain_prefix = "partner"

[microsites.partner.values]
PLATFORM_NAME = "Partner Academy"
SITE_NAME = "partner.example.com"
"#;

fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let static_root = dir.join("static");
    fs::create_dir_all(static_root.join("images/default-theme")).unwrap();
    fs::write(static_root.join("images/default-theme/logo.png"), b"hello\n").unwrap();
    let manifest = StaticManifest::build(&static_root).unwrap();
    let manifest_path = static_root.join(MANIFEST_NAME);
    manifest.write(&manifest_path).unwrap();

    let catalogs = dir.join("locale");
    fs::create_dir_all(&catalogs).unwrap();
    fs::write(
        catalogs.join("es.toml"),
        "[messages]\n\"Terms of Service\" = \"T\u{e9}rminos del servicio\"\n",
    )
    .unwrap();

    let cfg = format!(
        "{}\n[static_files]\nbase_url = \"/static/\"\nmanifest = {:?}\n\n[i18n]\ndefault_language = \"en\"\ncatalog_dir = {:?}\n",
        CONFIG,
        manifest_path.display().to_string(),
        catalogs.display().to_string(),
    );
    let path = dir.join("config.toml");
    fs::write(&path, cfg).unwrap();
    path
}

#[test]
fn footer_from_config_files() {
    let dir = tempdir().unwrap();
    let cfg = config::load_from(&write_fixture(dir.path())).unwrap();

    let links = ConfiguredMarketingLinks::new(cfg.marketing.clone());
    let assets = StaticStorage::from_config(&cfg.static_files).unwrap();
    let catalog_dir = cfg.i18n.catalog_dir.clone().unwrap();
    let translator = CatalogTranslator::load(&catalog_dir, "es").unwrap();

    let footer = FooterService::new(cfg.site(), &links, &assets, &translator).footer(true);

    assert!(footer.copyright.contains("MyOrg"));
    assert_eq!(
        footer.logo_image,
        "https://lms.example.com/static/images/default-theme/logo.5891b5b522d5.png"
    );

    assert_eq!(footer.social_links.len(), 2);
    assert_eq!(footer.social_links[1].name, "twitter");
    assert_eq!(footer.social_links[1].url, "#");

    let nav: Vec<(&str, &str)> = footer
        .navigation_links
        .iter()
        .map(|l| (l.name.as_str(), l.url.as_str()))
        .collect();
    // Not on the marketing site: CONTACT and FAQ fall back to local pages; NEWS/DONATE/JOBS are dropped.
    assert_eq!(
        nav,
        [
            ("about", "https://www.example.com/about"),
            ("contact", "/contact"),
            ("faq", "/help"),
            ("blog", "https://www.example.com/blog"),
        ]
    );

    assert_eq!(footer.mobile_links.len(), 2);
    assert_eq!(footer.mobile_links[1].url, "https://play.google.com/store/apps/example");

    assert_eq!(footer.legal_links[0].title, "T\u{e9}rminos del servicio");
    assert_eq!(footer.legal_links[0].url, "https://www.example.com/legal/tos");
    assert_eq!(footer.legal_links[1].title, "Privacy Policy");
}

#[test]
fn footer_json_shape_for_microsite() {
    let dir = tempdir().unwrap();
    let cfg = config::load_from(&write_fixture(dir.path())).unwrap();
    let links = ConfiguredMarketingLinks::new(cfg.marketing.clone());
    let assets = StaticStorage::from_config(&cfg.static_files).unwrap();
    let translator = CatalogTranslator::default();

    let service = FooterService::new(
        cfg.site_for_host(Some("partner.example.com:443")),
        &links,
        &assets,
        &translator,
    );
    assert_eq!(service.base_url(false), "http://partner.example.com");

    let json = serde_json::to_value(service.footer(false)).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "copyright",
            "legal_links",
            "logo_image",
            "mobile_links",
            "navigation_links",
            "openedx_link",
            "social_links",
        ]
    );
    assert!(json["copyright"].as_str().unwrap().contains("Partner Academy"));
    assert_eq!(json["social_links"][0]["icon-class"], "fa-facebook-square");
    assert_eq!(json["openedx_link"]["url"], "http://open.edx.org");
    assert_eq!(
        json["openedx_link"]["image"],
        "http://partner.example.com/static/images/openedx-logo-tag.png"
    );
}
