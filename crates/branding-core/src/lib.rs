//! Site branding: the footer shown on every page and served to other sites
//! through the branding API, plus the configuration and asset collaborators
//! it is assembled from.

pub mod checksum;
pub mod config;
pub mod error;
pub mod footer;
pub mod i18n;
pub mod logging;
pub mod marketing;
pub mod microsite;
pub mod static_files;

pub use config::{Branding, BrandingConfig, SiteConfig};
pub use error::BrandingError;
pub use footer::{FooterDescriptor, FooterService};
