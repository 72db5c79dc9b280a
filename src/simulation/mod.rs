pub mod comparison;
pub mod config;
pub mod engine;
pub mod result;
pub mod sweep;
