use crate::config::{Branding, SiteConfig};
use crate::i18n::Translator;
use crate::marketing::{MarketingLink, MarketingLinks, PLACEHOLDER_URL};
use crate::static_files::StaticAssets;

use super::types::{FooterDescriptor, MobileLink, NamedLink, PoweredByLink, SocialLink};

/// Organization named in the copyright on its own domain.
const CANONICAL_ORG_NAME: &str = "edX Inc";

// 'EdX', 'edX' and 'Open edX' are trademarks and must stay untranslated in catalogs.
const COPYRIGHT_TEMPLATE: &str = "\u{a9} {org_name}.  All rights reserved except where noted.  \
EdX, Open edX and the edX and OpenEdX logos are registered trademarks or trademarks of edX Inc.";

const CANONICAL_LOGO: &str = "images/edx-theme/edx-header-logo.png";
const PARTNER_LOGO: &str = "images/default-theme/logo.png";

const OPENEDX_URL: &str = "http://open.edx.org";
const OPENEDX_TITLE: &str = "Powered by Open edX";
const OPENEDX_BADGE: &str = "images/openedx-logo-tag.png";

const APPLE_BADGE: &str = "images/app/app_store_badge_135x40.svg";
const GOOGLE_BADGE: &str = "images/app/google_play_badge_45.png";

/// Footer navigation, in display order: (name, link, title msgid).
const NAVIGATION: [(&str, MarketingLink, &str); 7] = [
    ("about", MarketingLink::About, "About"),
    ("news", MarketingLink::News, "News"),
    ("contact", MarketingLink::Contact, "Contact"),
    ("faq", MarketingLink::Faq, "FAQ"),
    ("blog", MarketingLink::Blog, "edX Blog"),
    ("donate", MarketingLink::Donate, "Donate to edX"),
    ("jobs", MarketingLink::Jobs, "Jobs at edX"),
];

const LEGAL: [(&str, MarketingLink, &str); 2] = [
    ("terms_of_service", MarketingLink::Tos, "Terms of Service"),
    ("privacy_policy", MarketingLink::Privacy, "Privacy Policy"),
];

/// Assembles the site footer from a configuration snapshot and its collaborators.
///
/// Holds only shared borrows; one service can serve any number of threads.
#[derive(Clone, Copy)]
pub struct FooterService<'a> {
    site: SiteConfig<'a>,
    marketing: &'a dyn MarketingLinks,
    assets: &'a dyn StaticAssets,
    translator: &'a dyn Translator,
}

impl<'a> FooterService<'a> {
    pub fn new(
        site: SiteConfig<'a>,
        marketing: &'a dyn MarketingLinks,
        assets: &'a dyn StaticAssets,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            site,
            marketing,
            assets,
            translator,
        }
    }

    /// `https://<site>` or `http://<site>`, with the microsite's `SITE_NAME` taking precedence.
    pub fn base_url(&self, is_secure: bool) -> String {
        self.absolute_url(is_secure, "")
    }

    /// Build the footer for a request served over TLS (`is_secure`) or plain HTTP.
    pub fn footer(&self, is_secure: bool) -> FooterDescriptor {
        let footer = FooterDescriptor {
            copyright: self.copyright(),
            logo_image: self.logo_image(is_secure),
            social_links: self.social_links(),
            navigation_links: self.navigation_links(),
            mobile_links: self.mobile_links(is_secure),
            legal_links: self.legal_links(),
            openedx_link: self.openedx_link(is_secure),
        };
        tracing::debug!(
            site = self.site.site_name(),
            is_secure,
            social = footer.social_links.len(),
            navigation = footer.navigation_links.len(),
            mobile = footer.mobile_links.len(),
            "assembled footer"
        );
        footer
    }

    fn copyright(&self) -> String {
        let org_name = match self.site.branding() {
            Branding::CanonicalDomain => CANONICAL_ORG_NAME,
            Branding::PartnerSite => self.site.platform_name(),
        };
        self.translator
            .translate(COPYRIGHT_TEMPLATE, &[("org_name", org_name)])
    }

    fn logo_image(&self, is_secure: bool) -> String {
        let logo = match self.site.branding() {
            Branding::CanonicalDomain => CANONICAL_LOGO,
            Branding::PartnerSite => PARTNER_LOGO,
        };
        self.absolute_static_url(is_secure, logo)
    }

    /// Configured order, unfiltered: a network without a URL still renders, pointing at `#`.
    fn social_links(&self) -> Vec<SocialLink> {
        let cfg = self.site.global();
        cfg.social_media_footer_names
            .iter()
            .map(|name| {
                let display = cfg.social_media_footer_display.get(name);
                SocialLink {
                    name: name.clone(),
                    title: display.map(|d| d.title.clone()).unwrap_or_default(),
                    url: cfg
                        .social_media_footer_urls
                        .get(name)
                        .cloned()
                        .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
                    icon_class: display.map(|d| d.icon.clone()).unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Fixed order; links that resolve to nothing are dropped.
    fn navigation_links(&self) -> Vec<NamedLink> {
        NAVIGATION
            .iter()
            .filter_map(|&(name, link, title)| {
                let url = self.marketing.resolve(link);
                if url.is_empty() || url == PLACEHOLDER_URL {
                    return None;
                }
                Some(NamedLink {
                    name: name.to_string(),
                    title: self.translator.gettext(title).into_owned(),
                    url,
                })
            })
            .collect()
    }

    fn mobile_links(&self, is_secure: bool) -> Vec<MobileLink> {
        let cfg = self.site.global();
        if !cfg.features.enable_footer_mobile_app_links {
            return Vec::new();
        }
        [("apple", "Apple", APPLE_BADGE), ("google", "Google", GOOGLE_BADGE)]
            .into_iter()
            .map(|(name, title, badge)| MobileLink {
                name: name.to_string(),
                title: title.to_string(),
                url: cfg
                    .mobile_store_urls
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
                image: self.absolute_static_url(is_secure, badge),
            })
            .collect()
    }

    fn legal_links(&self) -> Vec<NamedLink> {
        LEGAL
            .iter()
            .map(|&(name, link, title)| NamedLink {
                name: name.to_string(),
                title: self.translator.gettext(title).into_owned(),
                url: self.marketing.resolve(link),
            })
            .collect()
    }

    fn openedx_link(&self, is_secure: bool) -> PoweredByLink {
        PoweredByLink {
            url: OPENEDX_URL.to_string(),
            title: self.translator.gettext(OPENEDX_TITLE).into_owned(),
            image: self.absolute_static_url(is_secure, OPENEDX_BADGE),
        }
    }

    fn absolute_url(&self, is_secure: bool, path: &str) -> String {
        format!("{}{}{}", protocol(is_secure), self.site.site_name(), path)
    }

    /// Absolute URL of a static asset, always in the request's protocol.
    /// Storage serving from another host (e.g. a CDN, full or protocol-relative
    /// URL) keeps its host; anything else is served from the site.
    fn absolute_static_url(&self, is_secure: bool, name: &str) -> String {
        let path = self.assets.url_for(name);
        let off_site = ["https://", "http://", "//"]
            .into_iter()
            .find_map(|prefix| path.strip_prefix(prefix));
        match off_site {
            Some(rest) => format!("{}{}", protocol(is_secure), rest),
            None => self.absolute_url(is_secure, &path),
        }
    }
}

fn protocol(is_secure: bool) -> &'static str {
    if is_secure {
        "https://"
    } else {
        "http://"
    }
}
