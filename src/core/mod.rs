pub mod batch;
pub mod mapping;
pub mod types;
