pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{BuildConfig, Section, Settings, SiteConfig};
pub use crate::core::date_format::{format_date, format_date_lossy, format_date_str};
pub use crate::core::reading_time::{reading_time, word_count, ReadingTimeEstimator};
pub use crate::domain::model::{ReadingEstimate, TemporalValue};
pub use crate::utils::error::{Result, SiteError};
