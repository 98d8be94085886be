pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod messages;
pub mod numbers;
pub mod temperature;
