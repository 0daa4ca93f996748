//! Album records and the ordered catalog loaded from embedded page data

use crate::error::CatalogError;
use deunicode::deunicode;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Release year as it appears in the page data.
///
/// Generated data writes years as strings, hand-written data often uses
/// bare numbers. Both render the same way.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{n}"),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// Album fields exactly as they are stored in the page data
#[derive(Deserialize)]
struct RawAlbum {
    album: String,
    #[serde(default)]
    artist: Vec<String>,
    #[serde(default)]
    genre: Vec<String>,
    year: Year,
}

/// Accent-folded copies of the text fields, computed once at load.
///
/// `Björk` folds to `Bjork`, so an ASCII query still finds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldedFields {
    pub title: String,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

impl FoldedFields {
    fn new(title: &str, artists: &[String], genres: &[String]) -> Self {
        Self {
            title: deunicode(title),
            artists: artists.iter().map(|a| deunicode(a)).collect(),
            genres: genres.iter().map(|g| deunicode(g)).collect(),
        }
    }
}

/// A single album record. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAlbum")]
pub struct Album {
    pub title: String,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub year: Year,
    pub folded: FoldedFields,
}

impl Album {
    pub fn new(
        title: impl Into<String>,
        artists: Vec<String>,
        genres: Vec<String>,
        year: Year,
    ) -> Self {
        let title = title.into();
        let folded = FoldedFields::new(&title, &artists, &genres);
        Self {
            title,
            artists,
            genres,
            year,
            folded,
        }
    }
}

impl From<RawAlbum> for Album {
    fn from(raw: RawAlbum) -> Self {
        Album::new(raw.album, raw.artist, raw.genre, raw.year)
    }
}

/// The album collection, keyed by the stem of each album's detail page.
///
/// Iteration order is the order the keys appear in the source JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Album)>,
}

impl Catalog {
    pub fn new(entries: Vec<(String, Album)>) -> Self {
        Self { entries }
    }

    /// Parse the embedded JSON object (`key -> album fields`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::info!("Loaded catalog with {} albums", catalog.len());
        Ok(catalog)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Album)> {
        self.entries.iter().map(|(key, album)| (key.as_str(), album))
    }

    pub fn get(&self, key: &str) -> Option<&Album> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, album)| album)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of album key to album fields")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Catalog, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, album)) = access.next_entry::<String, Album>()? {
            entries.push((key, album));
        }
        Ok(Catalog { entries })
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_source_order() {
        let json = r#"{
            "zeta": {"album": "Z", "artist": ["A"], "genre": ["G"], "year": "2001"},
            "alpha": {"album": "A", "artist": ["B"], "genre": ["H"], "year": "1999"},
            "mid": {"album": "M", "artist": ["C"], "genre": ["I"], "year": "2010"}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let keys: Vec<&str> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_year_accepts_string_or_number() {
        let json = r#"{
            "a": {"album": "A", "artist": [], "genre": [], "year": 1991},
            "b": {"album": "B", "artist": [], "genre": [], "year": "1992"}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get("a").unwrap().year, Year::Number(1991));
        assert_eq!(catalog.get("b").unwrap().year, Year::Text("1992".into()));
        assert_eq!(catalog.get("a").unwrap().year.to_string(), "1991");
    }

    #[test]
    fn test_folded_fields_are_computed_at_load() {
        let json = r#"{"hm": {"album": "Homogénic", "artist": ["Björk", "Mark Bell"], "genre": ["Électronique"], "year": "1997"}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let folded = &catalog.get("hm").unwrap().folded;
        assert_eq!(folded.title, "Homogenic");
        assert_eq!(folded.artists, vec!["Bjork", "Mark Bell"]);
        assert_eq!(folded.genres, vec!["Electronique"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"a1": {"album": "Nevermind", "artist": ["Nirvana"], "genre": ["Grunge"], "year": 1991, "search": "NevermindNirvana"}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get("a1").unwrap().title, "Nevermind");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Catalog::from_json(r#"{"a": {"artist": []}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_get_unknown_key() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("missing").is_none());
    }
}
