// Shared fixtures for integration tests

#![allow(dead_code)]

use rcgen::{CertificateParams, KeyPair};
use std::fs;
use std::path::{Path, PathBuf};
use time::{Duration, OffsetDateTime};

/// Self-signed PEM certificate for `names`, expiring `expires_in` from now
pub fn certificate_pem(names: &[&str], expires_in: Duration) -> String {
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let mut params = CertificateParams::new(names).expect("certificate params");
    params.not_before = OffsetDateTime::now_utc() - Duration::days(365);
    params.not_after = OffsetDateTime::now_utc() + expires_in;
    let key_pair = KeyPair::generate().expect("key pair");
    params.self_signed(&key_pair).expect("self-signed certificate").pem()
}

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Write a certificate for `names` to `root/relative`
pub fn write_certificate(
    root: &Path,
    relative: &str,
    names: &[&str],
    expires_in: Duration,
) -> PathBuf {
    write_file(root, relative, certificate_pem(names, expires_in).as_bytes())
}

/// Lay out the a/b/c fixture: a valid (30 days), b garbage, c valid (2 days)
pub fn write_abc_fixture(root: &Path) {
    write_certificate(root, "a/cert.pem", &["a.example.com"], Duration::days(30));
    write_file(root, "b/cert.pem", b"\x7fELF\x02\x01 definitely not PEM");
    write_certificate(root, "c/cert.pem", &["c.example.com"], Duration::days(2));
}

/// Recursive pattern for every cert.pem under `root`
pub fn watch_pattern(root: &Path) -> String {
    format!("{}/**/cert.pem", root.display())
}
