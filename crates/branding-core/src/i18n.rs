//! Translation of user-facing footer strings.
//!
//! The footer service never formats user-visible text directly; it goes
//! through a [`Translator`] so tests can inject [`IdentityTranslator`] and
//! deployments can load a per-language catalog.

use anyhow::Result;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BrandingError;

/// Looks up localized message strings.
pub trait Translator: Send + Sync {
    /// Localized form of `msgid`, or `msgid` itself when untranslated.
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;

    /// Translate `template`, then substitute `{name}` placeholders from `params`.
    fn translate(&self, template: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.gettext(template), params)
    }
}

/// Returns every message untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// On-disk catalog: `[messages]` table of msgid → msgstr.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Translator backed by a single-language message catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    language: String,
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(language: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            messages,
        }
    }

    /// Load `<dir>/<language>.toml`.
    pub fn load(dir: &Path, language: &str) -> Result<Self> {
        let path = catalog_path(dir, language);
        let data = fs::read_to_string(&path).map_err(|e| BrandingError::io(&path, e))?;
        let file: CatalogFile = toml::from_str(&data).map_err(|source| BrandingError::Toml {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            "loaded {} messages for language {} from {}",
            file.messages.len(),
            language,
            path.display()
        );
        Ok(Self::new(language, file.messages))
    }

    /// Load the catalog for `language`, degrading to an empty catalog (source
    /// strings) when it is missing or unreadable.
    pub fn load_or_untranslated(dir: &Path, language: &str) -> Self {
        match Self::load(dir, language) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!("no catalog for {language}, using source strings: {err:#}");
                Self::new(language, HashMap::new())
            }
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Translator for CatalogTranslator {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.get(msgid) {
            Some(msgstr) if !msgstr.is_empty() => Cow::Borrowed(msgstr.as_str()),
            _ => Cow::Borrowed(msgid),
        }
    }
}

pub fn catalog_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{language}.toml"))
}

/// Replace each `{name}` in `template` with the matching value from `params`.
///
/// Unknown placeholders are left as-is; `{{` and `}}` produce literal braces.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(i) = rest.find(['{', '}']) {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('{') {
            if let Some(end) = tail.find('}') {
                let name = &tail[1..end];
                if let Some((_, value)) = params.iter().find(|(k, _)| *k == name) {
                    out.push_str(value);
                    rest = &tail[end + 1..];
                    continue;
                }
            }
        }
        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn interpolate_named_params() {
        assert_eq!(
            interpolate("\u{a9} {org_name}. All rights reserved.", &[("org_name", "MyOrg")]),
            "\u{a9} MyOrg. All rights reserved."
        );
    }

    #[test]
    fn interpolate_leaves_unknown_and_escaped_braces() {
        assert_eq!(interpolate("{missing} ok", &[]), "{missing} ok");
        assert_eq!(interpolate("{{literal}} {x}", &[("x", "1")]), "{literal} 1");
        assert_eq!(interpolate("dangling {", &[]), "dangling {");
    }

    #[test]
    fn identity_translator_passes_through() {
        let t = IdentityTranslator;
        assert_eq!(t.gettext("About"), "About");
        assert_eq!(t.translate("Hi {who}", &[("who", "there")]), "Hi there");
    }

    #[test]
    fn catalog_translator_substitutes_then_interpolates() {
        let mut messages = HashMap::new();
        messages.insert("Hi {who}".to_string(), "Hola {who}".to_string());
        messages.insert("News".to_string(), String::new());
        let t = CatalogTranslator::new("es", messages);
        assert_eq!(t.translate("Hi {who}", &[("who", "Ana")]), "Hola Ana");
        // Empty msgstr means untranslated.
        assert_eq!(t.gettext("News"), "News");
        assert_eq!(t.gettext("Jobs"), "Jobs");
    }

    #[test]
    fn catalog_translator_loads_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fs::File::create(dir.path().join("fr.toml")).unwrap();
        writeln!(f, "[messages]\n\"Privacy Policy\" = \"Politique de confidentialit\u{e9}\"").unwrap();
        let t = CatalogTranslator::load(dir.path(), "fr").unwrap();
        assert_eq!(t.language(), "fr");
        assert_eq!(t.gettext("Privacy Policy"), "Politique de confidentialit\u{e9}");
    }

    #[test]
    fn missing_catalog_falls_back_to_source_strings() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CatalogTranslator::load(dir.path(), "de").is_err());
        let t = CatalogTranslator::load_or_untranslated(dir.path(), "de");
        assert_eq!(t.gettext("Terms of Service"), "Terms of Service");
    }
}
