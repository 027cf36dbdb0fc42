//! Error types for table configuration, persistence and startup loading.

/// A table configuration that must not be rendered.
///
/// Each variant corresponds to exactly one violated rule; the validator
/// reports the first one it hits.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("[FreezableTable Error]: There is no data to render")]
    NoData,

    #[error("[FreezableTable Error]: At least 1 column width value must present")]
    NoWidths,

    #[error(
        "[FreezableTable Error]: Invalid length for 'width' array, expected {expected} \
         (data keys amount + 1) but got {actual}"
    )]
    WidthLength { expected: usize, actual: usize },

    #[error(
        "[FreezableTable Error]: Value must be greater than 0 in 'width' array \
         (index {index} is {value})"
    )]
    NonPositiveWidth { index: usize, value: f64 },

    #[error(
        "[FreezableTable Error]: Value must be greater or equal to 1 for freezeColNum \
         (got {0}), otherwise leave blank with default value as 1"
    )]
    FreezeColNum(i64),

    #[error(
        "[FreezableTable Error]: Value must be between 1 and {rows} for freezeHeaderNum \
         (got {value}), otherwise leave blank with default value as 1"
    )]
    FreezeHeaderNum { value: i64, rows: usize },

    #[error(
        "[FreezableTable Error]: mainContainerStyles only supports styles relating to: \
         {allowed} (unsupported: {keys})"
    )]
    UnsupportedContainerStyles { keys: String, allowed: String },

    #[error(
        "[FreezableTable Error]: both 'width' and 'height' must present if one of them \
         is defined in mainContainerStyles"
    )]
    ContainerDimensions,

    #[error(
        "[FreezableTable Error]: 'flex' must be a positive number, or a string starting with \
         a positive number or 'auto', if none of 'width' and 'height' is defined in \
         mainContainerStyles"
    )]
    ContainerFlex,

    #[error(
        "[FreezableTable Error]: {group} only supports styles relating to: {allowed} \
         (unsupported: {keys})"
    )]
    UnsupportedCellStyles {
        group: &'static str,
        keys: String,
        allowed: String,
    },

    #[error("[FreezableTable Error]: row {row} does not have the same keys as the first row")]
    InconsistentRowKeys { row: usize },
}

/// Failures of the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store file root is not a JSON object")]
    NotAnObject,
}

/// A startup resource that could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to load {name} from {path}: {source}")]
    Read {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resource {0} is empty")]
    Empty(String),
}
