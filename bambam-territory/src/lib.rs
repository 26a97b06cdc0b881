pub mod algorithm;
pub mod app;
pub mod config;
pub mod model;
pub mod oracle;
pub mod output;
pub mod schedule;
