//! Application settings read from the environment.

use std::path::PathBuf;

pub const OPEN_VAR: &str = "FREEZETABLE_OPEN";
pub const STORE_VAR: &str = "FREEZETABLE_STORE";
pub const FONTS_VAR: &str = "FREEZETABLE_FONTS";

const DEFAULT_STORE_FILE: &str = "freezetable-store.json";
const DEFAULT_FONTS_DIR: &str = "assets/fonts";

#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Table configuration shown on the table screen at startup.
    pub open_path: Option<PathBuf>,
    pub store_path: PathBuf,
    /// Directory searched for `Montserrat-Regular.ttf` and `Montserrat-Bold.ttf`.
    /// No fonts ship with the crate; when they are absent the stylesheet's
    /// system fallbacks are used.
    pub fonts_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            open_path: None,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
        }
    }
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            open_path: get(OPEN_VAR).map(PathBuf::from),
            store_path: get(STORE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            fonts_dir: get(FONTS_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.fonts_dir),
        }
    }
}
