pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

// Infrastructure adapters (HTTP and filesystem sources)
pub mod infra;
