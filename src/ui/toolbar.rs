use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::table_config::TableConfig;
use crate::state::workouts::Workout;
use crate::ui::actions::{self, SharedStore};
use crate::ui::app::Screen;

#[component]
pub fn Toolbar(
    screen: Signal<Screen>,
    store: Signal<SharedStore>,
    workouts: Signal<Vec<Workout>>,
    table: Signal<Option<TableConfig>>,
    file_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
    reset_success: Signal<bool>,
) -> Element {
    let current = screen.read().clone();
    let on_table = matches!(current, Screen::Table);
    let file_label = file_path
        .read()
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned());
    let (workouts_class, table_class) = if on_table {
        ("toolbar-btn", "toolbar-btn active")
    } else {
        ("toolbar-btn active", "toolbar-btn")
    };

    rsx! {
        div { class: "toolbar",
            // Navigation group
            div { class: "toolbar-group",
                button {
                    class: workouts_class,
                    id: "btn-workouts",
                    onclick: move |_| screen.set(Screen::Workouts),
                    "\u{1F3CB} Workouts"
                }
                button {
                    class: table_class,
                    id: "btn-table",
                    onclick: move |_| screen.set(Screen::Table),
                    "\u{1F4CB} Table"
                }
            }
            div { class: "toolbar-separator" }

            // File group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_table_file(table, file_path, error_message).await;
                            screen.set(Screen::Table);
                        });
                    },
                    "\u{1F4C2} Open"
                }
                if let Some(name) = file_label {
                    span { class: "file-name", id: "file-name", "{name}" }
                }
            }
            div { class: "toolbar-separator" }

            // Store group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-reset-workouts",
                    onclick: move |_| {
                        if actions::reset_workouts(store, workouts, error_message) {
                            reset_success.set(true);
                            spawn(async move {
                                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                reset_success.set(false);
                            });
                        }
                    },
                    "\u{21BB} Reset workouts"
                }
                if *reset_success.read() {
                    span { class: "save-success", "\u{2714} Workouts restored" }
                }
            }
        }
    }
}
