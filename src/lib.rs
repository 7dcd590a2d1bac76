pub mod alerts;
pub mod config;
pub mod dedup;
pub mod enhance;
pub mod filter;
pub mod json_faker;
pub mod logging;
pub mod metrics;
pub mod provider;
pub mod reader;
pub mod reporter;
pub mod schema;
