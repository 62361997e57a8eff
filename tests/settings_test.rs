use anyhow::Result;
use site_utils::utils::validation::Validate;
use site_utils::{Section, Settings};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_site_settings_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("site.toml");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(
        br#"
[site]
name = "BitDoze"
description = "Tutorials for web developers"
url = "https://bitdoze.com"
posts_per_page = 12

[site.noindex]
tags = true
categories = true

[build]
site = "https://bitdoze.com"
base = "/"
adapter = "cloudflare"
integrations = ["mdx", "icon", "sitemap"]

[reading]
words_per_minute = 225
"#,
    )?;

    let settings = Settings::from_file(&path)?;
    settings.validate()?;

    assert_eq!(settings.site.page_count(25), 3);
    assert!(settings.site.noindex_for(Section::Categories));
    assert!(!settings.site.noindex_for(Section::Authors));
    assert_eq!(
        settings.site.canonical_url("/tags/rust/")?.as_str(),
        "https://bitdoze.com/tags/rust/"
    );

    let estimator = settings.reading_estimator()?;
    assert_eq!(estimator.words_per_minute(), 225);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Settings::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, site_utils::SiteError::IoError(_)));
}

#[test]
fn test_invalid_adapter_fails_validation() -> Result<()> {
    let settings = Settings::from_toml_str("[build]\nadapter = \"github-pages\"\n")?;
    assert!(settings.validate().is_err());
    Ok(())
}
