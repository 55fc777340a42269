//! Site footer assembly.
//!
//! [`FooterService`] turns a configuration snapshot into a
//! [`FooterDescriptor`] for both the organization's own domain and partner
//! deployments. Every user-facing string goes through the translator.
//! Theming is not supported.

mod service;
mod types;

pub use service::FooterService;
pub use types::{FooterDescriptor, MobileLink, NamedLink, PoweredByLink, SocialLink};
