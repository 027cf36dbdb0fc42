//! Startup resource loading.
//!
//! Failures here never stop the application: each one is logged as a
//! warning and loading is reported complete regardless.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::{debug, warn};

use crate::error::ResourceError;

pub trait ResourceLoader {
    fn name(&self) -> &str;
    fn load(&mut self) -> Result<(), ResourceError>;
}

/// Reads font files into memory, keyed by family name.
#[derive(Clone, Debug, Default)]
pub struct FontLoader {
    families: Vec<(String, PathBuf)>,
    loaded: BTreeMap<String, Vec<u8>>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled Montserrat families under `dir`.
    pub fn montserrat(dir: &Path) -> Self {
        Self::new()
            .with_font("montserrat", dir.join("Montserrat-Regular.ttf"))
            .with_font("montserrat-bold", dir.join("Montserrat-Bold.ttf"))
    }

    pub fn with_font(mut self, family: &str, path: impl Into<PathBuf>) -> Self {
        self.families.push((family.to_string(), path.into()));
        self
    }

    /// One `@font-face` rule per loaded family, with the font inlined as a
    /// data URL. Families that failed to load get no rule, so the stylesheet's
    /// fallback fonts apply.
    pub fn font_face_css(&self) -> String {
        let mut css = String::new();
        for (family, bytes) in &self.loaded {
            css.push_str(&format!(
                "@font-face {{ font-family: '{family}'; src: url(data:font/ttf;base64,{}) format('truetype'); }}\n",
                BASE64.encode(bytes)
            ));
        }
        css
    }
}

impl ResourceLoader for FontLoader {
    fn name(&self) -> &str {
        "fonts"
    }

    /// Loads every family it can and reports the first failure.
    fn load(&mut self) -> Result<(), ResourceError> {
        let mut first_error = None;
        for (family, path) in &self.families {
            match fs::read(path) {
                Ok(bytes) if bytes.is_empty() => {
                    first_error.get_or_insert(ResourceError::Empty(family.clone()));
                }
                Ok(bytes) => {
                    debug!(family = %family, bytes = bytes.len(), "loaded font");
                    self.loaded.insert(family.clone(), bytes);
                }
                Err(source) => {
                    first_error.get_or_insert(ResourceError::Read {
                        name: family.clone(),
                        path: path.display().to_string(),
                        source,
                    });
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Runs every loader once. Always returns `true` (loading complete).
pub fn load_cached_resources(loaders: &mut [&mut dyn ResourceLoader]) -> bool {
    for loader in loaders.iter_mut() {
        if let Err(err) = loader.load() {
            warn!(resource = loader.name(), error = %err, "resource failed to load");
        }
    }
    true
}
