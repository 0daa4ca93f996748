//! Site configuration
//!
//! Fixed identifiers shared by the views and the browser glue. The page
//! markup, session storage and generated detail pages all agree on these.

use crate::theme::Theme;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `id` of the search input
    pub search_input_id: String,
    /// `id` of the theme toggle button
    pub theme_button_id: String,
    /// `id` of the catalog table body
    pub table_body_id: String,
    /// Session storage key holding the theme flag
    pub theme_storage_key: String,
    /// Appended to an album key to build its detail page link
    pub detail_page_suffix: String,
    /// Class put on every catalog row
    pub row_class: String,
    /// Class put on the year cell
    pub year_class: String,
    /// Theme used when the session flag is absent or unrecognized
    pub default_theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_input_id: "search".to_string(),
            theme_button_id: "theme-button".to_string(),
            table_body_id: "tbody".to_string(),
            theme_storage_key: "theme".to_string(),
            detail_page_suffix: ".html".to_string(),
            row_class: "clickable".to_string(),
            year_class: "td-year".to_string(),
            default_theme: Theme::Light,
        }
    }
}

impl SiteConfig {
    /// Detail page link for an album key, e.g. `a1` -> `a1.html`
    pub fn detail_href(&self, key: &str) -> String {
        format!("{key}{}", self.detail_page_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_href() {
        let config = SiteConfig::default();
        assert_eq!(config.detail_href("a1"), "a1.html");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"detail_page_suffix": ".htm", "default_theme": "dark"}"#)
                .unwrap();
        assert_eq!(config.detail_href("x"), "x.htm");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.theme_storage_key, "theme");
    }
}
