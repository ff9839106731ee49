//! CLI configuration loaded from TOML.
//!
//! ```toml
//! parallel = true
//!
//! [options]
//! locale = "hi"
//! strictChecking = false
//!
//! [[catalogs]]
//! locale = "hi"
//! path = "locales/hi-overrides.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::{EvaluationOptions, Locale},
};

/// A message catalog file merged over the built-in templates for `locale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOverride {
    pub locale: Locale,
    pub path: PathBuf,
}

/// Top-level structure of the CLI configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Evaluate batch entries on the rayon pool.
    pub parallel: bool,

    /// Default options, overridden by `--locale` and `--strict`/`--no-strict`.
    pub options: EvaluationOptions,

    /// Catalog files applied in order after the built-in catalogs.
    pub catalogs: Vec<CatalogOverride>,
}

impl CliConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `EligibilityError::ConfigError` if the TOML is malformed or
    /// does not match `CliConfig`.
    pub fn from_toml_str(s: &str) -> EligibilityResult<Self> {
        toml::from_str(s).map_err(|e| EligibilityError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> EligibilityResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| EligibilityError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Evaluation options for a run. Values given on the command line win
    /// over the file; `None` keeps the file value.
    pub fn resolve_options(&self, locale: Option<Locale>, strict: Option<bool>) -> EvaluationOptions {
        EvaluationOptions {
            strict_checking: strict.unwrap_or(self.options.strict_checking),
            locale: locale.unwrap_or(self.options.locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use eligibility_contracts::{error::EligibilityError, options::Locale};

    use super::{CatalogOverride, CliConfig};

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
            parallel = true

            [options]
            locale = "hi"
            strictChecking = true

            [[catalogs]]
            locale = "en"
            path = "overrides/en.toml"
            "#,
        )
        .unwrap();

        assert!(config.parallel);
        assert_eq!(config.options.locale, Locale::Hi);
        assert!(config.options.strict_checking);
        assert_eq!(
            config.catalogs,
            vec![CatalogOverride { locale: Locale::En, path: PathBuf::from("overrides/en.toml") }]
        );
    }

    #[test]
    fn test_unknown_locale_is_config_error() {
        let result = CliConfig::from_toml_str("[options]\nlocale = \"fr\"\n");
        match result {
            Err(EligibilityError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse config TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_command_line_overrides_file_options() {
        let config =
            CliConfig::from_toml_str("[options]\nlocale = \"hi\"\nstrictChecking = true\n").unwrap();

        let kept = config.resolve_options(None, None);
        assert_eq!(kept.locale, Locale::Hi);
        assert!(kept.strict_checking);

        let overridden = config.resolve_options(Some(Locale::En), Some(false));
        assert_eq!(overridden.locale, Locale::En);
        assert!(!overridden.strict_checking);

        let lenient = CliConfig::default().resolve_options(None, Some(true));
        assert!(lenient.strict_checking);
    }
}
