use crate::browser::{self, BrowserThemeController};
use dioxus::prelude::*;
use liner_common::{Catalog, SiteConfig};
use liner_ui::stores::CatalogViewState;
use liner_ui::CatalogView;
use std::rc::Rc;
use tracing::{error, warn};

#[component]
pub fn CatalogPage() -> Element {
    let config = use_hook(SiteConfig::default);
    let catalog = use_hook(|| {
        crate::load_embedded_catalog()
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    match catalog {
        Ok(catalog) => rsx! {
            CatalogBrowser { catalog, config }
        },
        Err(e) => {
            error!("Failed to load catalog: {e}");
            rsx! {
                div { class: "load-error", "Failed to load catalog: {e}" }
            }
        }
    }
}

#[component]
fn CatalogBrowser(catalog: Rc<Catalog>, config: SiteConfig) -> Element {
    // First render shows everything; the theme is restored after.
    let mut state = use_store({
        let catalog = catalog.clone();
        let config = config.clone();
        move || CatalogViewState::initial(&catalog, &config)
    });

    let mut theme: Signal<Option<BrowserThemeController>> = use_signal({
        let config = config.clone();
        move || match browser::start_theme(&config) {
            Ok(controller) => Some(controller),
            Err(e) => {
                error!("Theme toggle unavailable: {e}");
                None
            }
        }
    });

    let (current_theme, theme_available) = match theme.read().as_ref() {
        Some(controller) => (controller.current_theme(), true),
        None => (config.default_theme, false),
    };

    let search_config = config.clone();

    rsx! {
        CatalogView {
            state,
            config,
            theme: current_theme,
            theme_available,
            on_search_change: move |query: String| {
                if let Err(e) = state.write().apply_query(&catalog, query, &search_config) {
                    warn!("{e}");
                }
            },
            on_row_click: move |href: String| browser::navigate_to(&href),
            on_theme_toggle: move |_| {
                if let Some(controller) = theme.write().as_mut() {
                    controller.toggle();
                }
            },
        }
    }
}

