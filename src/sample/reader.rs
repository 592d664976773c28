use polars::prelude::*;

use std::path::Path;

use crate::error::{Error, Result};
use super::dataset::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV file to [`Dataset`].
/// Every column is read as a categorical (string) column.
///
/// # Example
/// ```no_run
/// use id3tree::DatasetReader;
/// let dataset = DatasetReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DatasetReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> DatasetReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    /// Without a header, polars names the columns
    /// `column_1`, `column_2`, ...
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns [`Dataset`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file
            .ok_or_else(|| std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "the file name is not set",
            ))?;
        let target = self.target
            .ok_or_else(|| Error::MissingTarget { column: String::new() })?;

        let data = CsvReader::from_path(file.as_ref())?
            .has_header(self.has_header)
            .infer_schema(Some(0))
            .finish()?;

        log::debug!(
            "read {} rows and {} columns from {}",
            data.height(),
            data.width(),
            file.as_ref().display(),
        );

        Dataset::from_dataframe(data, target.as_ref())
    }
}
