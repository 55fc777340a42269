//! Footer descriptor returned to templates and API consumers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "icon-class")]
    pub icon_class: String,
}

/// A `{name, title, url}` link (navigation and legal sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileLink {
    pub name: String,
    pub title: String,
    pub url: String,
    /// Absolute URL of the store badge.
    pub image: String,
}

/// The "powered by" badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoweredByLink {
    pub url: String,
    pub title: String,
    pub image: String,
}

/// Everything a page needs to render the site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterDescriptor {
    pub copyright: String,
    pub logo_image: String,
    pub social_links: Vec<SocialLink>,
    pub navigation_links: Vec<NamedLink>,
    pub mobile_links: Vec<MobileLink>,
    pub legal_links: Vec<NamedLink>,
    pub openedx_link: PoweredByLink,
}
