//! Defines some common functions used in this library.

/// Defines label counting and majority vote.
pub(crate) mod utils;
