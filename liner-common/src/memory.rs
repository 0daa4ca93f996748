//! In-memory style scope and session store
//!
//! Used by tests and by any host without a DOM.

use crate::theme::{SessionFlagStore, StyleScope};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStyle {
    properties: HashMap<String, String>,
}

impl MemoryStyle {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Every property currently set
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.properties.clone()
    }
}

impl StyleScope for MemoryStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySession {
    items: HashMap<String, String>,
}

impl MemorySession {
    pub fn with_flag(key: &str, value: &str) -> Self {
        let mut session = Self::default();
        session.set(key, value);
        session
    }
}

impl SessionFlagStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}
