pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod links;
pub mod model;
pub mod report;
