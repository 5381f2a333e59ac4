// API Models

pub mod error;

pub use error::ApiError;
