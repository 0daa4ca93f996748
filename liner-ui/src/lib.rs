//! liner-ui - View components for the liner catalog page
//!
//! Pure, props-based views. Browser effects (navigation, style writes,
//! session storage) are handed in as event handlers by the web crate.

pub mod components;
pub mod stores;

pub use components::*;
