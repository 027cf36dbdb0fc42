use dioxus::prelude::*;

use crate::state::workouts::{find_workout, format_duration, workout_table_config, Workout};
use crate::ui::app::Screen;
use crate::ui::freezable_table::FreezableTable;

#[component]
pub fn WorkoutList(workouts: Signal<Vec<Workout>>, screen: Signal<Screen>) -> Element {
    let items = workouts.read().clone();

    if items.is_empty() {
        return rsx! {
            p { class: "empty-message", id: "empty-workouts", "No workouts stored." }
        };
    }

    rsx! {
        ul { class: "workout-list", id: "workout-list",
            for workout in items {
                li {
                    key: "{workout.slug}",
                    class: "workout-item",
                    id: format!("workout-{}", workout.slug),
                    onclick: {
                        let slug = workout.slug.clone();
                        let mut screen = screen;
                        move |_| screen.set(Screen::open_workout(&slug))
                    },
                    span { class: "workout-name", "{workout.name}" }
                    span { class: "workout-meta",
                        "Duration: {format_duration(workout.duration)}"
                    }
                    span { class: "workout-meta", "Difficulty: {workout.difficulty:?}" }
                }
            }
        }
    }
}

#[component]
pub fn WorkoutDetail(slug: String, workouts: Signal<Vec<Workout>>, screen: Signal<Screen>) -> Element {
    let workout = find_workout(&workouts.read(), &slug).cloned();

    let back = move |_: MouseEvent| {
        let mut screen = screen;
        screen.set(Screen::Workouts);
    };

    let Some(workout) = workout else {
        return rsx! {
            div { class: "workout-detail",
                button { class: "toolbar-btn", onclick: back, "\u{2190} Back" }
                p { class: "empty-message", "Unknown workout: {slug}" }
            }
        };
    };

    rsx! {
        div { class: "workout-detail", id: "workout-detail",
            button { class: "toolbar-btn", id: "btn-back", onclick: back, "\u{2190} Back" }
            h2 { class: "workout-title", "Slug - {workout.slug}" }
            p { class: "workout-meta",
                "{workout.name} \u{00B7} {format_duration(workout.sequence_duration())}"
            }
            FreezableTable { config: workout_table_config(&workout) }
        }
    }
}
