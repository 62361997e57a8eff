use crate::config::build::BuildConfig;
use crate::config::site::SiteConfig;
use crate::core::reading_time::{ReadingTimeEstimator, DEFAULT_WORDS_PER_MINUTE};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_positive_number, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// The whole settings file. Every section is optional and falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteConfig,
    pub build: BuildConfig,
    pub reading: ReadingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from TOML text, substituting `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn reading_estimator(&self) -> Result<ReadingTimeEstimator> {
        ReadingTimeEstimator::new(self.reading.words_per_minute)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.site.validate()?;
        self.build.validate()?;
        validate_positive_number(
            "reading.words_per_minute",
            self.reading.words_per_minute as usize,
            1,
        )?;

        let site_url = url::Url::parse(&self.site.url).ok();
        let build_url = url::Url::parse(&self.build.site).ok();
        let site_host = site_url.as_ref().and_then(|u| u.host_str());
        let build_host = build_url.as_ref().and_then(|u| u.host_str());
        if site_host != build_host {
            return Err(SiteError::InvalidConfigValueError {
                field: "build.site".to_string(),
                value: self.build.site.clone(),
                reason: format!("Host does not match site.url ({})", self.site.url),
            });
        }

        Ok(())
    }
}
