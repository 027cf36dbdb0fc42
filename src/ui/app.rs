use dioxus::prelude::*;
use std::path::PathBuf;

use crate::config::AppSettings;
use crate::io::json_io;
use crate::io::kv_store::MemoryStore;
use crate::state::table_config::TableConfig;
use crate::state::workouts::Workout;
use crate::ui::actions::{self, SharedStore, DEFAULT_COLUMN_WIDTH};
use crate::ui::freezable_table::FreezableTable;
use crate::ui::toolbar::Toolbar;
use crate::ui::workouts::{WorkoutDetail, WorkoutList};

const STYLES: Asset = asset!("/assets/styles.css");

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Workouts,
    WorkoutDetail { slug: String },
    Table,
}

impl Screen {
    /// Detail screen of the workout identified by `slug`.
    pub fn open_workout(slug: &str) -> Self {
        Screen::WorkoutDetail {
            slug: slug.to_string(),
        }
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_hook(AppSettings::from_env);
    let store = use_signal::<SharedStore>(|| Box::new(MemoryStore::new()));
    let workouts = use_signal::<Vec<Workout>>(Vec::new);
    let table = use_signal::<Option<TableConfig>>(|| None);
    let file_path = use_signal::<Option<PathBuf>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);
    let reset_success = use_signal(|| false);
    let screen = use_signal(|| Screen::Workouts);
    let font_faces = use_signal(String::new);
    let mut loading_complete = use_signal(|| false);

    use_effect({
        let mut store = store;
        let mut workouts = workouts;
        let mut table = table;
        let mut file_path = file_path;
        let mut error_message = error_message;
        let mut screen = screen;
        let mut font_faces = font_faces;
        move || {
            font_faces.set(actions::load_font_faces(&settings));

            let (mut opened, store_error) = actions::open_store(&settings);
            let mut first_error = store_error;
            match actions::seed_and_read(opened.as_mut()) {
                Ok(rows) => workouts.set(rows),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
            store.set(opened);

            if let Some(path) = settings.open_path.clone() {
                match json_io::load_table_config(&path, DEFAULT_COLUMN_WIDTH) {
                    Ok(config) => {
                        table.set(Some(config));
                        file_path.set(Some(path));
                        screen.set(Screen::Table);
                    }
                    Err(e) => {
                        first_error.get_or_insert(e.to_string());
                    }
                }
            }

            error_message.set(first_error);
            loading_complete.set(true);
        }
    });

    if !*loading_complete.read() {
        return rsx! {
            document::Stylesheet { href: STYLES }
            p { class: "empty-message", "Loading\u{2026}" }
        };
    }

    let current = screen.read().clone();
    let table_snapshot = table.read().clone();

    rsx! {
        document::Stylesheet { href: STYLES }
        if !font_faces.read().is_empty() {
            document::Style { "{font_faces}" }
        }
        div { class: "app",
            Toolbar { screen, store, workouts, table, file_path, error_message, reset_success }
            if let Some(message) = error_message.read().as_ref() {
                p { class: "error-message", id: "error-message", "{message}" }
            }
            {match current {
                Screen::Workouts => rsx! {
                    WorkoutList { workouts, screen }
                },
                Screen::WorkoutDetail { slug } => rsx! {
                    WorkoutDetail { slug, workouts, screen }
                },
                Screen::Table => match table_snapshot {
                    Some(config) => rsx! {
                        div { class: "table-screen", FreezableTable { config } }
                    },
                    None => rsx! {
                        p { class: "empty-message", id: "empty-message",
                            "No table loaded. Click \"Open\" to load a JSON file."
                        }
                    },
                },
            }}
        }
    }
}
