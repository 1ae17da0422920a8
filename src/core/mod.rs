pub mod app;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod lookup;
pub mod math;
pub mod paths;
pub mod query;
