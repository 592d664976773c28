//! Errors returned by this crate.
use std::io;


/// Errors that can occur while reading a dataset,
/// growing a tree, or classifying an instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tree cannot be grown from zero samples.
    #[error("cannot build a decision tree from an empty dataset")]
    EmptyDataset,

    /// The instance has no value for a feature the tree tests.
    #[error("instance has no value for the feature `{feature}`")]
    MissingFeature {
        /// Name of the tested feature.
        feature: String,
    },

    /// The feature name is not a column of the dataset.
    #[error("the feature `{feature}` does not exist")]
    UnknownFeature {
        /// The requested name.
        feature: String,
    },

    /// Two columns share the same name.
    #[error("the feature `{feature}` appears more than once")]
    DuplicateFeature {
        /// The repeated name.
        feature: String,
    },

    /// A column does not have one entry per sample.
    #[error("column `{column}` has {got} values, expected {expected}")]
    ShapeMismatch {
        /// Name of the offending column.
        column: String,
        /// Number of labels in the dataset.
        expected: usize,
        /// Number of values in the column.
        got: usize,
    },

    /// An input frame contains a null cell.
    #[error("column `{column}` has no value at row {row}")]
    MissingValue {
        /// Name of the column.
        column: String,
        /// Zero-based row index.
        row: usize,
    },

    /// A row index past the last sample.
    #[error("row {row} is out of range for {n_sample} samples")]
    RowOutOfRange {
        /// The requested row.
        row: usize,
        /// Number of samples in the dataset.
        n_sample: usize,
    },

    /// The target column was not set or does not exist.
    #[error("target column `{column}` is not available")]
    MissingTarget {
        /// The requested target name (empty if none was given).
        column: String,
    },

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// polars could not parse or convert a frame.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A tree could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


/// Shorthand for results of this crate.
pub type Result<T> = std::result::Result<T, Error>;
