pub mod actions;
pub mod app;
pub mod freezable_table;
pub mod toolbar;
pub mod workouts;
