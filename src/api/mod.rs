// API Module - HTTP boundary for certificate status reports

pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use server::ApiServer;
pub use state::AppState;
