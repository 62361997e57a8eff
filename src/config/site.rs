use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_site_path, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use url::Url;

/// Site-wide settings consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    pub posts_per_page: usize,
    pub noindex: NoIndexConfig,
    pub default_image: String,
}

/// Which listing sections carry a `noindex` robots meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoIndexConfig {
    pub tags: bool,
    pub categories: bool,
    pub authors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Posts,
    Tags,
    Categories,
    Authors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "BitDoze".to_string(),
            description: "Providing valuable resources and tutorials for web developers and tech enthusiasts.".to_string(),
            url: "https://bitdoze.com".to_string(),
            posts_per_page: 10,
            noindex: NoIndexConfig::default(),
            default_image: "/images/default-og.jpg".to_string(),
        }
    }
}

impl Default for NoIndexConfig {
    fn default() -> Self {
        Self {
            tags: true,
            categories: false,
            authors: false,
        }
    }
}

impl SiteConfig {
    pub fn noindex_for(&self, section: Section) -> bool {
        match section {
            Section::Posts => false,
            Section::Tags => self.noindex.tags,
            Section::Categories => self.noindex.categories,
            Section::Authors => self.noindex.authors,
        }
    }

    /// Joins a site-relative path onto the configured site URL.
    pub fn canonical_url(&self, path: &str) -> Result<Url> {
        let base = validate_url("site.url", &self.url)?;
        base.join(path)
            .map_err(|e| SiteError::invalid_input(path, format!("cannot join onto site URL: {}", e)))
    }

    pub fn default_image_url(&self) -> Result<Url> {
        self.canonical_url(&self.default_image)
    }

    /// Number of listing pages for `total_posts`. An empty listing still has one page.
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = self.posts_per_page.max(1);
        total_posts.div_ceil(per_page).max(1)
    }

    /// Index range of the posts shown on 1-based `page`, or `None` past the last page.
    pub fn page_bounds(&self, page: usize, total_posts: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count(total_posts) {
            return None;
        }
        let per_page = self.posts_per_page.max(1);
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_posts);
        Some(start.min(end)..end)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.name)?;
        validate_url("site.url", &self.url)?;
        validate_positive_number("site.posts_per_page", self.posts_per_page, 1)?;
        validate_site_path("site.default_image", &self.default_image)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_site() {
        let site = SiteConfig::default();
        assert_eq!(site.name, "BitDoze");
        assert_eq!(site.posts_per_page, 10);
        assert!(site.noindex_for(Section::Tags));
        assert!(!site.noindex_for(Section::Categories));
        assert!(!site.noindex_for(Section::Authors));
        assert!(!site.noindex_for(Section::Posts));
        assert!(site.validate().is_ok());
    }

    #[test]
    fn test_canonical_urls() {
        let site = SiteConfig::default();
        assert_eq!(
            site.canonical_url("/blog/rust-intro/").unwrap().as_str(),
            "https://bitdoze.com/blog/rust-intro/"
        );
        assert_eq!(
            site.default_image_url().unwrap().as_str(),
            "https://bitdoze.com/images/default-og.jpg"
        );
    }

    #[test]
    fn test_pagination() {
        let site = SiteConfig::default();
        assert_eq!(site.page_count(0), 1);
        assert_eq!(site.page_count(10), 1);
        assert_eq!(site.page_count(11), 2);
        assert_eq!(site.page_bounds(1, 25), Some(0..10));
        assert_eq!(site.page_bounds(3, 25), Some(20..25));
        assert_eq!(site.page_bounds(4, 25), None);
        assert_eq!(site.page_bounds(0, 25), None);
        assert_eq!(site.page_bounds(1, 0), Some(0..0));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut site = SiteConfig::default();
        site.posts_per_page = 0;
        assert!(site.validate().is_err());

        let mut site = SiteConfig::default();
        site.default_image = "images/default-og.jpg".to_string();
        assert!(site.validate().is_err());

        let mut site = SiteConfig::default();
        site.name = "  ".to_string();
        assert!(site.validate().is_err());
    }
}
