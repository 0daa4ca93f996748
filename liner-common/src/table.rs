//! Catalog table rows
//!
//! `render_rows` is the whole render step minus the DOM: filter the catalog
//! in order and turn each match into display cells. The view replaces the
//! table body with the result.

use crate::catalog::{Album, Catalog};
use crate::config::SiteConfig;
use crate::error::MatchError;
use crate::matcher::Query;

/// One rendered table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumRow {
    /// Catalog key, unique per row
    pub key: String,
    pub title: String,
    /// Artists joined with `", "`
    pub artists: String,
    /// Genres joined with `", "`
    pub genres: String,
    pub year: String,
    /// Detail page the row navigates to
    pub href: String,
}

impl AlbumRow {
    pub fn new(key: &str, album: &Album, config: &SiteConfig) -> Self {
        Self {
            key: key.to_string(),
            title: album.title.clone(),
            artists: album.artists.join(", "),
            genres: album.genres.join(", "),
            year: album.year.to_string(),
            href: config.detail_href(key),
        }
    }
}

/// Build the rows for `query`, in catalog order. Never sorts.
pub fn render_rows(
    catalog: &Catalog,
    query: &str,
    config: &SiteConfig,
) -> Result<Vec<AlbumRow>, MatchError> {
    let query = Query::compile(query)?;
    let rows: Vec<AlbumRow> = catalog
        .iter()
        .filter(|(_, album)| query.matches(album))
        .map(|(key, album)| AlbumRow::new(key, album, config))
        .collect();

    tracing::debug!("Rendered {} of {} albums", rows.len(), catalog.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Year;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            (
                "a1".to_string(),
                Album::new(
                    "Nevermind",
                    vec!["Nirvana".to_string()],
                    vec!["Grunge".to_string()],
                    Year::Number(1991),
                ),
            ),
            (
                "b2".to_string(),
                Album::new(
                    "Kind of Blue",
                    vec!["Miles Davis".to_string()],
                    vec!["Jazz".to_string(), "Modal".to_string()],
                    Year::Text("1959".to_string()),
                ),
            ),
        ])
    }

    #[test]
    fn test_row_cells() {
        let rows = render_rows(&catalog(), "nirv", &SiteConfig::default()).unwrap();
        assert_eq!(
            rows,
            vec![AlbumRow {
                key: "a1".into(),
                title: "Nevermind".into(),
                artists: "Nirvana".into(),
                genres: "Grunge".into(),
                year: "1991".into(),
                href: "a1.html".into(),
            }]
        );
    }

    #[test]
    fn test_multiple_values_are_comma_joined() {
        let rows = render_rows(&catalog(), "blue", &SiteConfig::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].genres, "Jazz, Modal");
    }

    #[test]
    fn test_empty_query_shows_all_in_order() {
        let rows = render_rows(&catalog(), "", &SiteConfig::default()).unwrap();
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a1", "b2"]);
    }

    #[test]
    fn test_no_match_yields_no_rows() {
        let rows = render_rows(&catalog(), "polka", &SiteConfig::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        assert!(render_rows(&catalog(), "[", &SiteConfig::default()).is_err());
    }
}
