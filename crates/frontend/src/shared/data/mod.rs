pub mod gateway;
pub mod source;

pub use gateway::DataGateway;
pub use source::{DatasetSource, FetchError, HttpDatasetSource};
