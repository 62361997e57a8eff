use crate::utils::error::{Result, SiteError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Site-relative paths such as `/images/default-og.jpg` or a base of `/`.
pub fn validate_site_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }

    if path.contains('\0') || path.chars().any(char::is_whitespace) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes or whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("site.url", "https://bitdoze.com").is_ok());
        assert!(validate_url("site.url", "http://localhost:4321").is_ok());
        assert!(validate_url("site.url", "").is_err());
        assert!(validate_url("site.url", "bitdoze.com").is_err());
        assert!(validate_url("site.url", "ftp://bitdoze.com").is_err());
    }

    #[test]
    fn test_validate_site_path() {
        assert!(validate_site_path("build.base", "/").is_ok());
        assert!(validate_site_path("site.default_image", "/images/og.jpg").is_ok());
        assert!(validate_site_path("site.default_image", "images/og.jpg").is_err());
        assert!(validate_site_path("site.default_image", "/my image.jpg").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("site.posts_per_page", 10, 1).is_ok());
        assert!(validate_positive_number("site.posts_per_page", 0, 1).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("build.adapter", "cloudflare", &["cloudflare", "node"]).is_ok());
        assert!(validate_one_of("build.adapter", "vercel", &["cloudflare", "node"]).is_err());
    }
}
