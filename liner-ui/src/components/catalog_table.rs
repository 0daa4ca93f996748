//! Catalog table - one row per album, in the order given

use dioxus::prelude::*;
use liner_common::AlbumRow;

#[component]
pub fn CatalogTable(
    rows: Vec<AlbumRow>,
    /// `id` of the `tbody`
    body_id: String,
    row_class: String,
    year_class: String,
    /// Called with the row's detail page link
    on_row_click: EventHandler<String>,
) -> Element {
    rsx! {
        table { class: "catalog-table",
            thead {
                tr {
                    th { "Album" }
                    th { "Artist" }
                    th { "Genre" }
                    th { class: "{year_class}", "Year" }
                }
            }
            tbody { id: "{body_id}",
                for row in rows.iter() {
                    CatalogRow {
                        key: "{row.key}",
                        row: row.clone(),
                        row_class: row_class.clone(),
                        year_class: year_class.clone(),
                        on_click: on_row_click,
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogRow(
    row: AlbumRow,
    row_class: String,
    year_class: String,
    on_click: EventHandler<String>,
) -> Element {
    let href = row.href.clone();

    rsx! {
        tr {
            class: "{row_class}",
            onclick: move |_| on_click.call(href.clone()),
            td { "{row.title}" }
            td { "{row.artists}" }
            td { "{row.genres}" }
            td { class: "{year_class}", "{row.year}" }
        }
    }
}
