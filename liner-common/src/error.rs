use thiserror::Error;

/// Errors raised while loading the embedded catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while compiling a search query
#[derive(Error, Debug, Clone)]
pub enum MatchError {
    /// The query is not a valid regular expression. Raw user input is
    /// compiled as-is, so an unbalanced group lands here.
    #[error("Invalid search pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
