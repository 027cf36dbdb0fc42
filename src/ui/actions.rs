use dioxus::prelude::*;
use std::path::PathBuf;

use tracing::warn;

use crate::config::AppSettings;
use crate::io::json_io;
use crate::io::kv_store::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::state::resources::{self, FontLoader};
use crate::state::table_config::TableConfig;
use crate::state::workouts::{clear_workouts, get_workouts, init_workouts, seed_workouts, Workout};

/// Column width used when a file holds bare rows without a `width` array.
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

pub type SharedStore = Box<dyn KeyValueStore>;

/// Reads the Montserrat fonts from the fonts directory and returns the
/// `@font-face` rules for those found. Always completes; failures are only
/// logged and leave the system fallback fonts in place.
pub fn load_font_faces(settings: &AppSettings) -> String {
    let mut fonts = FontLoader::montserrat(&settings.fonts_dir);
    resources::load_cached_resources(&mut [&mut fonts]);
    fonts.font_face_css()
}

/// Opens the configured store, falling back to an in-memory one.
pub fn open_store(settings: &AppSettings) -> (SharedStore, Option<String>) {
    match JsonFileStore::open(&settings.store_path) {
        Ok(store) => (Box::new(store), None),
        Err(err) => {
            warn!(
                path = %settings.store_path.display(),
                error = %err,
                "falling back to in-memory store"
            );
            (Box::new(MemoryStore::new()), Some(err.to_string()))
        }
    }
}

/// Seeds the bundled workouts if the store has none, then reads them back.
pub fn seed_and_read(store: &mut dyn KeyValueStore) -> Result<Vec<Workout>, String> {
    let seed = seed_workouts().map_err(|e| e.to_string())?;
    init_workouts(store, &seed).map_err(|e| e.to_string())?;
    get_workouts(store).map_err(|e| e.to_string())
}

pub async fn open_table_file(
    mut table: Signal<Option<TableConfig>>,
    mut file_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        let path = handle.path().to_path_buf();
        match json_io::load_table_config(&path, DEFAULT_COLUMN_WIDTH) {
            Ok(config) => {
                table.set(Some(config));
                file_path.set(Some(path));
                error_message.set(None);
            }
            Err(e) => {
                error_message.set(Some(e.to_string()));
            }
        }
    }
}

/// Clears the stored workouts and seeds them again.
pub fn reset_workouts(
    mut store: Signal<SharedStore>,
    mut workouts: Signal<Vec<Workout>>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    let result = store.with_mut(|store| {
        clear_workouts(store.as_mut()).map_err(|e| e.to_string())?;
        seed_and_read(store.as_mut())
    });

    match result {
        Ok(next) => {
            workouts.set(next);
            error_message.set(None);
            true
        }
        Err(err) => {
            error_message.set(Some(err));
            false
        }
    }
}
