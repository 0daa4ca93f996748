//! Browser effects: root style scope, session storage, navigation
//!
//! Each handle is resolved once at startup. A missing window, document or
//! root element is fatal for the theme toggle and is reported to the caller.

use liner_common::{SessionFlagStore, SiteConfig, StyleScope, ThemeController};
use thiserror::Error;
use tracing::warn;
use wasm_bindgen_x::JsCast;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrowserError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Document has no root element")]
    NoRootElement,
    #[error("Session storage unavailable: {0}")]
    NoSessionStorage(String),
}

/// Theme controller backed by the live page
pub type BrowserThemeController = ThemeController<RootStyle, SessionStorage>;

fn window() -> Result<web_sys_x::Window, BrowserError> {
    web_sys_x::window().ok_or(BrowserError::NoWindow)
}

/// Inline style of the document root (`:root` custom properties)
pub struct RootStyle {
    style: web_sys_x::CssStyleDeclaration,
}

impl RootStyle {
    pub fn from_document() -> Result<Self, BrowserError> {
        let document = window()?.document().ok_or(BrowserError::NoDocument)?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys_x::HtmlElement>().ok())
            .ok_or(BrowserError::NoRootElement)?;
        Ok(Self {
            style: root.style(),
        })
    }
}

impl StyleScope for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(e) = self.style.set_property(name, value) {
            warn!("Failed to set style property {name}: {e:?}");
        }
    }
}

pub struct SessionStorage {
    storage: web_sys_x::Storage,
}

impl SessionStorage {
    pub fn open() -> Result<Self, BrowserError> {
        let storage = window()?
            .session_storage()
            .map_err(|e| BrowserError::NoSessionStorage(format!("{e:?}")))?
            .ok_or_else(|| BrowserError::NoSessionStorage("not supported".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionFlagStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("Failed to persist {key}={value}: {e:?}");
        }
    }
}

/// Resolve the page's style scope and session storage, then restore the
/// session's theme onto the page.
pub fn start_theme(config: &SiteConfig) -> Result<BrowserThemeController, BrowserError> {
    let style = RootStyle::from_document()?;
    let session = SessionStorage::open()?;
    Ok(ThemeController::init(
        style,
        session,
        config.theme_storage_key.clone(),
        config.default_theme,
    ))
}

/// Send the browser to `href`. The target page is not checked.
pub fn navigate_to(href: &str) {
    let Ok(window) = window() else {
        warn!("Cannot navigate to {href}: no window");
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        warn!("Failed to navigate to {href}: {e:?}");
    }
}
