pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;
pub mod report;
pub mod startup;
