pub mod datasets;
pub mod fixtures;
