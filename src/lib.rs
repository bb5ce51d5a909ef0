pub mod aggregator;
pub mod assistant;
pub mod boundaries;
pub mod cli;
pub mod loader;
pub mod models;
pub mod projection;
pub mod report;
pub mod storage;
pub mod types;
pub mod views;
