//! Catalog page state store

use dioxus::prelude::*;
use liner_common::{render_rows, AlbumRow, Catalog, MatchError, SiteConfig};

/// State for the catalog table
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogViewState {
    /// Current search input value
    pub query: String,
    /// Rows from the last query that compiled
    pub rows: Vec<AlbumRow>,
    /// Why the current query produced no update, if it failed to compile
    pub query_error: Option<String>,
}

impl CatalogViewState {
    /// State for the first render: empty query, every album shown.
    pub fn initial(catalog: &Catalog, config: &SiteConfig) -> Self {
        Self {
            query: String::new(),
            rows: render_rows(catalog, "", config).unwrap_or_default(),
            query_error: None,
        }
    }

    /// Record `query` and re-render the rows for it.
    ///
    /// A query that fails to compile leaves `rows` untouched and sets
    /// `query_error`; the next query that compiles clears it.
    pub fn apply_query(
        &mut self,
        catalog: &Catalog,
        query: String,
        config: &SiteConfig,
    ) -> Result<(), MatchError> {
        let result = render_rows(catalog, &query, config);
        self.query = query;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.query_error = None;
                Ok(())
            }
            Err(e) => {
                self.query_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "a1": {"album": "Nevermind", "artist": ["Nirvana"], "genre": ["Grunge"], "year": 1991},
                "kb": {"album": "Kind of Blue", "artist": ["Miles Davis"], "genre": ["Jazz"], "year": "1959"}
            }"#,
        )
        .unwrap()
    }

    fn keys(state: &CatalogViewState) -> Vec<&str> {
        state.rows.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = CatalogViewState::initial(&catalog(), &SiteConfig::default());
        assert_eq!(state.query, "");
        assert_eq!(keys(&state), vec!["a1", "kb"]);
        assert_eq!(state.query_error, None);
    }

    #[test]
    fn test_invalid_query_keeps_previous_rows() {
        let catalog = catalog();
        let config = SiteConfig::default();
        let mut state = CatalogViewState::initial(&catalog, &config);

        state.apply_query(&catalog, "nirv".to_string(), &config).unwrap();
        let previous = state.rows.clone();
        assert_eq!(keys(&state), vec!["a1"]);

        let err = state.apply_query(&catalog, "(bad".to_string(), &config);
        assert!(matches!(err, Err(MatchError::InvalidPattern { .. })));
        assert_eq!(state.rows, previous);
        assert_eq!(state.query, "(bad");
        assert!(state.query_error.is_some());

        state.apply_query(&catalog, "jazz".to_string(), &config).unwrap();
        assert_eq!(keys(&state), vec!["kb"]);
        assert_eq!(state.query_error, None);
    }

    #[test]
    fn test_zero_match_query_clears_rows() {
        let catalog = catalog();
        let config = SiteConfig::default();
        let mut state = CatalogViewState::initial(&catalog, &config);

        state.apply_query(&catalog, "polka".to_string(), &config).unwrap();
        assert!(state.rows.is_empty());
        assert_eq!(state.query_error, None);
    }
}
