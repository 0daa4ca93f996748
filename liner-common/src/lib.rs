//! liner-common - Pure catalog and theme logic for liner
//!
//! No browser access lives here. The web crate plugs its DOM and session
//! storage handles into the traits in [`theme`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod memory;
pub mod table;
pub mod theme;

pub use catalog::{Album, Catalog, FoldedFields, Year};
pub use config::SiteConfig;
pub use error::{CatalogError, MatchError};
pub use matcher::{matches, Query};
pub use table::{render_rows, AlbumRow};
pub use theme::{
    apply_theme, Palette, SessionFlagStore, StyleScope, Theme, ThemeController, DARK_PALETTE,
    LIGHT_PALETTE,
};
