//! Catalog page view - pure rendering, no data loading
//!
//! Accepts `ReadStore<CatalogViewState>` and reads fields through lenses.

use crate::components::{CatalogTable, SearchInput, ThemeButton};
use crate::stores::catalog::{CatalogViewState, CatalogViewStateStoreExt};
use dioxus::prelude::*;
use liner_common::{SiteConfig, Theme};

#[component]
pub fn CatalogView(
    state: ReadStore<CatalogViewState>,
    config: SiteConfig,
    theme: Theme,
    /// False when the page's style scope or session storage is missing
    #[props(default = true)]
    theme_available: bool,
    on_search_change: EventHandler<String>,
    on_row_click: EventHandler<String>,
    on_theme_toggle: EventHandler<()>,
) -> Element {
    let query = state.query().read().clone();
    let rows = state.rows().read().clone();
    let query_error = state.query_error().read().clone();

    rsx! {
        header { class: "page-header",
            ThemeButton {
                theme,
                id: config.theme_button_id.clone(),
                disabled: !theme_available,
                on_toggle: on_theme_toggle,
            }
        }
        div { id: "wrapper",
            main { id: "main",
                SearchInput {
                    value: query,
                    id: config.search_input_id.clone(),
                    placeholder: "Search albums, artists, genres, years",
                    invalid: query_error.is_some(),
                    on_input: on_search_change,
                }
                CatalogTable {
                    rows,
                    body_id: config.table_body_id.clone(),
                    row_class: config.row_class.clone(),
                    year_class: config.year_class.clone(),
                    on_row_click,
                }
            }
        }
    }
}
