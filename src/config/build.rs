use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_one_of, validate_site_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const KNOWN_ADAPTERS: &[&str] = &["cloudflare", "node", "netlify", "vercel"];
pub const KNOWN_INTEGRATIONS: &[&str] = &["mdx", "icon", "sitemap"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Static,
    Server,
}

/// Framework build settings: where the site lives and how it is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub site: String,
    pub base: String,
    pub output: OutputMode,
    /// `adapter = "none"` in TOML clears the default adapter.
    #[serde(with = "adapter_field")]
    pub adapter: Option<String>,
    pub integrations: Vec<String>,
    pub vite_plugins: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site: "https://bitdoze.com".to_string(),
            base: "/".to_string(),
            output: OutputMode::Static,
            adapter: Some("cloudflare".to_string()),
            integrations: vec!["mdx".to_string(), "icon".to_string(), "sitemap".to_string()],
            vite_plugins: vec!["tailwindcss".to_string()],
        }
    }
}

mod adapter_field {
    use serde::{Deserialize, Deserializer, Serializer};

    const NO_ADAPTER: &str = "none";

    pub fn serialize<S: Serializer>(
        adapter: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(adapter.as_deref().unwrap_or(NO_ADAPTER))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok((name != NO_ADAPTER).then_some(name))
    }
}

impl BuildConfig {
    pub fn has_integration(&self, name: &str) -> bool {
        self.integrations.iter().any(|i| i == name)
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        validate_url("build.site", &self.site)?;
        validate_site_path("build.base", &self.base)?;

        match (&self.output, &self.adapter) {
            (OutputMode::Server, None) => {
                return Err(SiteError::MissingConfigError {
                    field: "build.adapter".to_string(),
                })
            }
            (_, Some(adapter)) => validate_one_of("build.adapter", adapter, KNOWN_ADAPTERS)?,
            (OutputMode::Static, None) => {}
        }

        for integration in &self.integrations {
            validate_one_of("build.integrations", integration, KNOWN_INTEGRATIONS)?;
        }

        Ok(())
    }
}
