//! Workouts shown by the demo application.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::StoreError;
use crate::io::kv_store::KeyValueStore;
use crate::state::data_model::{row_from_pairs, Row};
use crate::state::table_config::TableConfig;

pub const WORKOUT_KEY: &str = "workout-data";

const SEED_WORKOUTS: &str = include_str!("../../assets/data/workouts.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Exercise,
    Stretch,
    Break,
}

impl SequenceKind {
    pub fn label(self) -> &'static str {
        match self {
            SequenceKind::Exercise => "exercise",
            SequenceKind::Stretch => "stretch",
            SequenceKind::Break => "break",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceItem {
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SequenceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Seconds.
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub slug: String,
    pub name: String,
    /// Seconds.
    pub duration: u32,
    pub difficulty: Difficulty,
    pub sequence: Vec<SequenceItem>,
}

impl Workout {
    pub fn sequence_duration(&self) -> u32 {
        self.sequence.iter().map(|item| item.duration).sum()
    }
}

/// The bundled workouts used to seed an empty store.
pub fn seed_workouts() -> Result<Vec<Workout>, serde_json::Error> {
    serde_json::from_str(SEED_WORKOUTS)
}

/// Stores `seed` unless workouts are already present. Returns whether it seeded.
pub fn init_workouts(store: &mut dyn KeyValueStore, seed: &[Workout]) -> Result<bool, StoreError> {
    if store.contains_key(WORKOUT_KEY)? {
        return Ok(false);
    }
    info!(count = seed.len(), "storing workout data");
    store.store(WORKOUT_KEY, &serde_json::to_value(seed)?)?;
    Ok(true)
}

pub fn get_workouts(store: &dyn KeyValueStore) -> Result<Vec<Workout>, StoreError> {
    match store.get(WORKOUT_KEY)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

pub fn clear_workouts(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    info!("removing workout data");
    store.remove(WORKOUT_KEY)
}

pub fn find_workout<'a>(workouts: &'a [Workout], slug: &str) -> Option<&'a Workout> {
    workouts.iter().find(|workout| workout.slug == slug)
}

/// `mm:ss`; minutes are not capped at 59.
pub fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// A freezable table listing the steps of `workout`, one row per step.
pub fn workout_table_config(workout: &Workout) -> TableConfig {
    let data: Vec<Row> = workout
        .sequence
        .iter()
        .map(|item| {
            row_from_pairs([
                ("name", Value::from(item.name.clone())),
                ("type", Value::from(item.kind.label())),
                (
                    "reps",
                    item.reps.map(Value::from).unwrap_or(Value::Null),
                ),
                ("duration", Value::from(format_duration(item.duration))),
            ])
        })
        .collect();

    TableConfig {
        first_cell_content: "#".to_string(),
        cap_header: true,
        bold_header: true,
        ..TableConfig::new(data, vec![60.0, 200.0, 120.0, 80.0, 100.0])
    }
}
