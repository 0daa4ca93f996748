pub mod browser;
pub mod pages;

use dioxus::prelude::*;
use liner_common::{Catalog, CatalogError};
use pages::CatalogPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Album data baked into the page at build time
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Parse the embedded album data. Called once at startup.
pub fn load_embedded_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Album index" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        CatalogPage {}
    }
}
