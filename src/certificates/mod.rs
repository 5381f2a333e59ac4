// Certificates module - Discovery, parsing and expiry classification

pub mod classifier;
pub mod locator;
pub mod reader;

pub use classifier::{CertStatus, CertificateRecord, classify};
pub use locator::locate;
pub use reader::{ParsedCertificate, read_certificate};
