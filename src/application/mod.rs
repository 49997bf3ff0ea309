pub mod postprocess;
pub mod query;
