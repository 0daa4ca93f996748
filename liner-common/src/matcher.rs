//! Search query matching
//!
//! The query text is compiled as a case-insensitive regular expression
//! without escaping. Fields are tried title, artists, genres, then year,
//! stopping at the first hit. Each text field is tried as written and then
//! in its accent-folded form.

use crate::catalog::Album;
use crate::error::MatchError;
use regex::{Regex, RegexBuilder};

/// A compiled search query. The empty query matches everything.
#[derive(Clone, Debug)]
pub struct Query {
    pattern: Option<Regex>,
}

impl Query {
    pub fn compile(text: &str) -> Result<Self, MatchError> {
        if text.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|source| MatchError::InvalidPattern {
                pattern: text.to_string(),
                source,
            })?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Whether this query shows every album
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn matches(&self, album: &Album) -> bool {
        let Some(re) = &self.pattern else {
            return true;
        };

        let folded = &album.folded;
        field_matches(re, &album.title, &folded.title)
            || album
                .artists
                .iter()
                .zip(&folded.artists)
                .any(|(artist, plain)| field_matches(re, artist, plain))
            || album
                .genres
                .iter()
                .zip(&folded.genres)
                .any(|(genre, plain)| field_matches(re, genre, plain))
            || re.is_match(&album.year.to_string())
    }
}

fn field_matches(re: &Regex, value: &str, folded: &str) -> bool {
    re.is_match(value) || (folded != value && re.is_match(folded))
}

/// Compile `query` and test it against a single album.
pub fn matches(album: &Album, query: &str) -> Result<bool, MatchError> {
    Ok(Query::compile(query)?.matches(album))
}
