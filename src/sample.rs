//! Struct `Dataset` represents a batch of labeled samples
//! whose features take discrete values.

// Provides feature struct.
pub(crate) mod feature;
// Provides dataset struct.
pub(crate) mod dataset;
// Provides index views over a dataset.
pub(crate) mod partition;
// Provides a single unlabeled sample.
pub(crate) mod instance;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use feature::Feature;
pub use dataset::Dataset;
pub use partition::Partition;
pub use instance::Instance;
pub use reader::DatasetReader;
