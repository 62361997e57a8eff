pub mod build;
#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod site;

pub use build::{BuildConfig, OutputMode};
#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use settings::{ReadingConfig, Settings};
pub use site::{NoIndexConfig, Section, SiteConfig};
