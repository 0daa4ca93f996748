//! Light/dark theme state
//!
//! The active theme is tracked explicitly in [`ThemeController`]; nothing is
//! inferred from rendered styles. Effects go through two seams so the same
//! logic drives the browser and in-memory test doubles:
//! - [`StyleScope`]: the root element's CSS custom properties
//! - [`SessionFlagStore`]: per-session key/value storage

use serde::Deserialize;
use std::fmt;

/// A fixed set of CSS custom property values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub variables: &'static [(&'static str, &'static str)],
}

pub const LIGHT_PALETTE: Palette = Palette {
    variables: &[
        ("--text-primary", "#444444"),
        ("--text-secondary", "#6a6a6a"),
        ("--text-disabled", "#aaaaaa"),
        ("--bg-primary", "#e8e8e8"),
        ("--bg-secondary", "#cacaca"),
        ("--bg-highlight", "#cddddd"),
        ("--bg-info", "#88bbbb"),
        ("--info-border", "#668888"),
    ],
};

pub const DARK_PALETTE: Palette = Palette {
    variables: &[
        ("--text-primary", "#bbbbbb"),
        ("--text-secondary", "#959595"),
        ("--text-disabled", "#555555"),
        ("--bg-primary", "#181818"),
        ("--bg-secondary", "#343434"),
        ("--bg-highlight", "#223232"),
        ("--bg-info", "#113366"),
        ("--info-border", "#002244"),
    ],
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to session storage
    pub fn as_flag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Button label for the active theme
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse a stored session flag. Only exact `"light"` / `"dark"` count.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// Where palette values get written (the document root in a browser)
pub trait StyleScope {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Session-scoped string storage
pub trait SessionFlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Write every variable of `palette` onto `scope`.
pub fn apply_theme(scope: &mut impl StyleScope, palette: &Palette) {
    for (name, value) in palette.variables {
        scope.set_property(name, value);
    }
}

/// Owns the style scope and session store and flips between themes.
pub struct ThemeController<S, F> {
    style: S,
    flags: F,
    storage_key: String,
    current: Theme,
}

impl<S: StyleScope, F: SessionFlagStore> ThemeController<S, F> {
    /// Restore the session's theme and apply it. Never writes the flag.
    ///
    /// An absent or unrecognized flag falls back to `default_theme`.
    pub fn init(
        mut style: S,
        flags: F,
        storage_key: impl Into<String>,
        default_theme: Theme,
    ) -> Self {
        let storage_key = storage_key.into();
        let current = flags
            .get(&storage_key)
            .as_deref()
            .and_then(Theme::from_flag)
            .unwrap_or(default_theme);

        apply_theme(&mut style, &current.palette());
        tracing::debug!("Restored {} theme", current);

        Self {
            style,
            flags,
            storage_key,
            current,
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    pub fn label(&self) -> &'static str {
        self.current.label()
    }

    /// Switch to the other theme and remember it for the session.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.opposite();
        apply_theme(&mut self.style, &next.palette());
        self.flags.set(&self.storage_key, next.as_flag());
        self.current = next;
        tracing::info!("Switched to {} theme", next);
        next
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn flags(&self) -> &F {
        &self.flags
    }
}
