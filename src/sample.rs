//! Struct `Sample` represents the validation batch.

// Provides the sample struct.
pub(crate) mod sample_struct;
// Provides the CSV reader.
pub(crate) mod reader;


pub use sample_struct::{Instance, Sample};
pub use reader::SampleReader;
