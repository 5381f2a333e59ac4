// Scanner module - Concurrent certificate scanning

pub mod coordinator;

pub use coordinator::{ScanCoordinator, ScanFailure, ScanResult};
