pub mod catalog;
pub mod config;
pub mod detect;
pub mod error;
pub mod label;
pub mod policy;
pub mod prompt;
pub mod session;

// Re-export common error type
pub use error::{BingioError, Result};
