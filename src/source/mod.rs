//! File-backed stand-in for the record source: one JSON or YAML document
//! holding the roster, leave types, holidays and the already-fetched records.

pub mod dataset;
pub mod sample;

pub use dataset::{Dataset, RawRecord};
pub use sample::sample_dataset;
