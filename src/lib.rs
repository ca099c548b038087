pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod logging;
pub mod market;
pub mod metrics;
pub mod models;
pub mod pipeline;
