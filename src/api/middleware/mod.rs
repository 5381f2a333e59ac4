// Middleware Module

pub mod logging;

pub use logging::logging_layer;
