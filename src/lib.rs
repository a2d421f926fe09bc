// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;
pub mod search;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};
