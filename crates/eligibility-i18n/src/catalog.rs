//! TOML-backed message catalog.
//!
//! Each locale is a flat TOML table of `key = "template"` entries. Templates
//! use `{name}` placeholders filled from the variables passed to
//! `translate`. Lookup falls back to English, then to the key itself, so a
//! gap in a catalog degrades to readable text instead of failing.
//!
//! ```toml
//! missing_field = "Missing required field: {field}"
//! ```

use std::collections::HashMap;
use std::path::Path;

use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::Locale,
};
use eligibility_core::traits::Translator;

const EN: &str = include_str!("../locales/en.toml");
const HI: &str = include_str!("../locales/hi.toml");

/// Message templates for every supported locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// The catalogs bundled with this crate (`en`, `hi`).
    ///
    /// Returns `EligibilityError::ConfigError` only if a bundled file is
    /// malformed.
    pub fn builtin() -> EligibilityResult<Self> {
        let mut catalog = Self::default();
        catalog.load_toml_str(Locale::En, EN)?;
        catalog.load_toml_str(Locale::Hi, HI)?;
        Ok(catalog)
    }

    /// Parse `s` as a flat TOML table and merge it into `locale`'s templates.
    /// Keys already present are replaced.
    pub fn load_toml_str(&mut self, locale: Locale, s: &str) -> EligibilityResult<()> {
        let templates: HashMap<String, String> =
            toml::from_str(s).map_err(|e| EligibilityError::ConfigError {
                reason: format!("failed to parse '{locale}' message catalog: {e}"),
            })?;
        self.locales.entry(locale).or_default().extend(templates);
        Ok(())
    }

    /// Read the file at `path` and merge it into `locale`'s templates.
    pub fn load_file(&mut self, locale: Locale, path: &Path) -> EligibilityResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| EligibilityError::ConfigError {
            reason: format!("failed to read message catalog '{}': {}", path.display(), e),
        })?;
        self.load_toml_str(locale, &contents)
    }

    /// The raw template for `key` in `locale`, if defined there.
    pub fn template(&self, locale: Locale, key: &str) -> Option<&str> {
        self.locales
            .get(&locale)
            .and_then(|templates| templates.get(key))
            .map(String::as_str)
    }
}

impl Translator for Catalog {
    fn translate(&self, locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
        let template = self
            .template(locale, key)
            .or_else(|| self.template(Locale::En, key))
            .unwrap_or(key);

        vars.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }
}
