pub mod converter;
pub mod engine;
pub mod matcher;
pub mod session;
pub mod types;
