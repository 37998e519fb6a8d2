pub mod brackets;
pub mod error;
pub mod logger;
pub mod monitor;
pub mod validation;
