use crate::table::ValueKind;

/// Configuration errors surfaced before any layout computation runs.
///
/// These are never retried or silently corrected; an empty input table is
/// not an error and produces an empty layout instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("column `{name}` not found in table (columns: {available:?})")]
    ColumnNotFound { name: String, available: Vec<String> },

    #[error(
        "label column `{label}` and prediction column `{prediction}` must share one value kind (found {first} and {second})"
    )]
    ColumnTypeMismatch {
        label: String,
        prediction: String,
        first: ValueKind,
        second: ValueKind,
    },

    #[error(
        "unrecognized orientation `{token}` (accepted: h, x, horizontal, precision, v, y, vertical, recall)"
    )]
    UnknownOrientation { token: String },

    #[error(
        "unrecognized sort mode `{token}` (accepted: frequency, by_frequency, count, alphabetical, alpha, lexicographic)"
    )]
    UnknownSortMode { token: String },
}
