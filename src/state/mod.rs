pub mod data_model;
pub mod framer;
pub mod layout;
pub mod resources;
pub mod scroll_sync;
pub mod style;
pub mod table_config;
pub mod validator;
pub mod workouts;
